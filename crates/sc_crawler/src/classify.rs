use sc_core::{ArticleRecord, VisitedPage};
use sc_storage::Roster;

use crate::extract::ArticleText;
use crate::matcher::best_match;
use crate::score::extract_score;

/// Turns crawled pages into article records.
#[derive(Debug, Clone)]
pub struct Classifier {
    roster: Roster,
}

impl Classifier {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// `None` when the article names no known team or carries no score; such
    /// pages are left out of the statistics.
    pub fn classify(&self, page: &VisitedPage, article: &ArticleText) -> Option<ArticleRecord> {
        let text = article.combined();
        let team = best_match(&text, self.roster.names())?;
        let score = extract_score(&text)?;
        Some(ArticleRecord {
            url: page.url.clone(),
            headline: page.headline.clone(),
            team: Some(team.to_string()),
            score,
        })
    }
}
