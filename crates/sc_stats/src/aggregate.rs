use std::collections::HashMap;

use sc_core::{ArticleRecord, Result, ScoreLine, TeamStat};

/// Average game differential per team, in order of each team's first record.
///
/// Records without a team are ignored. A score that does not parse as `A-B`
/// aborts the aggregation with [`sc_core::Error::MalformedScore`].
pub fn aggregate(records: &[ArticleRecord]) -> Result<Vec<TeamStat>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<u32>)> = Vec::new();

    for record in records {
        let Some(team) = record.team.as_deref() else {
            continue;
        };
        let differential = record.score.parse::<ScoreLine>()?.differential();
        let slot = *index.entry(team).or_insert_with(|| {
            groups.push((team, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(differential);
    }

    Ok(groups
        .into_iter()
        .map(|(team, differentials)| TeamStat {
            team: team.to_string(),
            avg_game_difference: mean(&differentials),
        })
        .collect())
}

fn mean(values: &[u32]) -> f64 {
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    total as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::Error;

    fn record(team: Option<&str>, score: &str) -> ArticleRecord {
        ArticleRecord {
            url: format!("http://a.test/{}.html", score),
            headline: String::new(),
            team: team.map(str::to_string),
            score: score.to_string(),
        }
    }

    #[test]
    fn test_average_differential() {
        let stats = aggregate(&[record(Some("A"), "21-14"), record(Some("A"), "10-10")]).unwrap();
        assert_eq!(
            stats,
            vec![TeamStat { team: "A".to_string(), avg_game_difference: 3.5 }]
        );
    }

    #[test]
    fn test_first_occurrence_order() {
        let records = [
            record(Some("Wales"), "3-24"),
            record(Some("England"), "30-3"),
            record(Some("Wales"), "12-12"),
            record(None, "99-0"),
            record(Some("Argentina"), "7-6"),
        ];
        let stats = aggregate(&records).unwrap();
        let teams: Vec<_> = stats.iter().map(|s| s.team.as_str()).collect();
        assert_eq!(teams, ["Wales", "England", "Argentina"]);
        assert_eq!(stats[0].avg_game_difference, 10.5);
        assert_eq!(stats[1].avg_game_difference, 27.0);
        assert_eq!(stats[2].avg_game_difference, 1.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_score_is_fatal() {
        let err = aggregate(&[record(Some("A"), "21:14")]).unwrap_err();
        assert!(matches!(err, Error::MalformedScore(s) if s == "21:14"));
    }
}
