use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A page reached by the crawler, keyed by its normalized absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitedPage {
    pub url: String,
    pub headline: String,
}

/// A crawled page classified by team and final score.
///
/// `score` is kept as the literal `A-B` text captured from the article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: String,
    pub headline: String,
    pub team: Option<String>,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStat {
    pub team: String,
    pub avg_game_difference: f64,
}

/// A parsed `A-B` score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLine {
    pub first: u32,
    pub second: u32,
}

impl ScoreLine {
    /// Absolute difference between the two numbers.
    pub fn differential(&self) -> u32 {
        self.first.abs_diff(self.second)
    }
}

impl FromStr for ScoreLine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedScore(s.to_string());
        let (first, second) = s.trim().split_once('-').ok_or_else(malformed)?;
        Ok(ScoreLine {
            first: first.parse().map_err(|_| malformed())?,
            second: second.parse().map_err(|_| malformed())?,
        })
    }
}
