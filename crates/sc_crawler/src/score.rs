use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A space-delimited `N-N` pair of one to three digit numbers. Only ASCII
    /// digits count; other Unicode decimal digits never form a score, which
    /// keeps every match parseable by `ScoreLine`.
    static ref SCORE_PATTERN: Regex = Regex::new(r"\s([0-9]{1,3})-([0-9]{1,3})").unwrap();
}

/// A score candidate found in article text, digits exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatch<'t> {
    pub first: &'t str,
    pub second: &'t str,
}

impl ScoreMatch<'_> {
    pub fn sum(&self) -> u32 {
        // at most three ASCII digits each, always parses
        self.first.parse::<u32>().unwrap_or(0) + self.second.parse::<u32>().unwrap_or(0)
    }

    pub fn to_score_string(&self) -> String {
        format!("{}-{}", self.first, self.second)
    }
}

/// Every score candidate in `text`, left to right.
pub fn score_candidates(text: &str) -> impl Iterator<Item = ScoreMatch<'_>> {
    SCORE_PATTERN.captures_iter(text).filter_map(|caps| {
        Some(ScoreMatch {
            first: caps.get(1)?.as_str(),
            second: caps.get(2)?.as_str(),
        })
    })
}

/// Finds the final score of a game report.
///
/// Heuristic: the final score is the candidate with the largest sum, since
/// running scores reported during a match are smaller. The leftmost candidate
/// wins a tie. Returns `"A-B"` with the digits as captured.
pub fn extract_score(text: &str) -> Option<String> {
    score_candidates(text)
        .fold(None::<(u32, ScoreMatch)>, |best, candidate| {
            let sum = candidate.sum();
            match best {
                Some((best_sum, _)) if best_sum >= sum => best,
                _ => Some((sum, candidate)),
            }
        })
        .map(|(_, found)| found.to_score_string())
}
