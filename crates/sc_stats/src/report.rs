use chrono::{DateTime, Utc};
use sc_core::{ArticleRecord, Result, TeamStat};
use tracing::debug;

use crate::chart::{comparison_chart, frequency_chart, ChartRenderer};
use crate::frequency::{compare, team_frequencies, top_teams, TeamComparison, TeamFrequency};

pub const TOP_TEAMS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    /// File stem, e.g. `top_teams`.
    pub name: String,
    pub contents: String,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub frequencies: Vec<TeamFrequency>,
    pub comparison: Vec<TeamComparison>,
}

impl Report {
    pub fn build(records: &[ArticleRecord], stats: &[TeamStat]) -> Self {
        let frequencies = team_frequencies(records);
        let comparison = compare(stats, &frequencies);
        debug!(
            "Report covers {} teams, {} with stats",
            frequencies.len(),
            comparison.len()
        );
        Self {
            generated_at: Utc::now(),
            frequencies,
            comparison,
        }
    }

    pub fn render(&self, renderer: &dyn ChartRenderer) -> Result<Vec<RenderedChart>> {
        let stamp = format!("Generated {}\n", self.generated_at.to_rfc3339());
        let charts = [
            ("top_teams", frequency_chart(top_teams(&self.frequencies, TOP_TEAMS))),
            ("frequency_vs_difference", comparison_chart(&self.comparison)),
        ];

        charts
            .into_iter()
            .map(|(name, chart)| {
                Ok(RenderedChart {
                    name: name.to_string(),
                    contents: format!("{}{}", stamp, renderer.render(&chart)?),
                })
            })
            .collect()
    }
}
