use std::collections::HashMap;

use sc_core::{ArticleRecord, TeamStat};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamFrequency {
    pub team: String,
    pub count: usize,
}

/// Article frequency next to the average game difference, both scaled by
/// their column maximum so they share one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamComparison {
    pub team: String,
    pub article_freq: f64,
    pub avg_game_difference: f64,
}

/// Number of articles per team, most written-about first. Teams with equal
/// counts keep the order in which they were first seen.
pub fn team_frequencies(records: &[ArticleRecord]) -> Vec<TeamFrequency> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TeamFrequency> = Vec::new();

    for team in records.iter().filter_map(|r| r.team.as_deref()) {
        match index.get(team) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(team, counts.len());
                counts.push(TeamFrequency { team: team.to_string(), count: 1 });
            }
        }
    }

    // stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn top_teams(frequencies: &[TeamFrequency], n: usize) -> &[TeamFrequency] {
    &frequencies[..n.min(frequencies.len())]
}

/// Joins stats and frequencies on team name and normalizes each column by its
/// maximum. Teams missing from either side are dropped. Sorted by article
/// frequency descending, then average game difference ascending.
pub fn compare(stats: &[TeamStat], frequencies: &[TeamFrequency]) -> Vec<TeamComparison> {
    let by_team: HashMap<&str, f64> = stats
        .iter()
        .map(|s| (s.team.as_str(), s.avg_game_difference))
        .collect();

    let joined: Vec<(&str, f64, f64)> = frequencies
        .iter()
        .filter_map(|f| {
            by_team
                .get(f.team.as_str())
                .map(|&diff| (f.team.as_str(), f.count as f64, diff))
        })
        .collect();

    let max_freq = joined.iter().map(|j| j.1).fold(0.0, f64::max);
    let max_diff = joined.iter().map(|j| j.2).fold(0.0, f64::max);

    let mut rows: Vec<TeamComparison> = joined
        .into_iter()
        .map(|(team, freq, diff)| TeamComparison {
            team: team.to_string(),
            article_freq: scale(freq, max_freq),
            avg_game_difference: scale(diff, max_diff),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.article_freq
            .total_cmp(&a.article_freq)
            .then(a.avg_game_difference.total_cmp(&b.avg_game_difference))
    });
    rows
}

fn scale(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max
    } else {
        0.0
    }
}
