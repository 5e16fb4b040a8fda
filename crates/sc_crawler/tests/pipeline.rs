use std::fs;
use std::sync::Arc;

use sc_core::{CrawlConfig, FaultPolicy, OutputConfig, TeamStat};
use sc_crawler::{MemoryFetcher, PipelineManager};
use sc_stats::TextChart;
use sc_storage::{CsvStorage, Roster};
use tempfile::tempdir;

const BASE: &str = "http://rugby.test/main/";

const ROSTER: &str = r#"{"teams": [
    {"name": "Argentina"},
    {"name": "England"},
    {"name": "New Zealand"},
    {"name": "South Africa"}
]}"#;

fn article(headline: &str, body: &str, links: &[&str]) -> String {
    let nav: String = links
        .iter()
        .map(|href| format!(r#"<li><a href="{}">{}</a></li>"#, href, href))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{headline}</title></head>
<body>
  <ul class="nav"><li><a href="/main/Hodg001.html">Home</a></li>{nav}</ul>
  <h1 class="headline">{headline}</h1>
  <div id="article_detail">
    <p>{body}</p>
  </div>
</body>
</html>"#
    )
}

fn site() -> MemoryFetcher {
    let pages = [
        (
            "Hodg001.html",
            article(
                "Rugby Championship preview",
                "Previews for every side, no results yet.",
                &["Hodg002.html", "Hodg003.html"],
            ),
        ),
        (
            "Hodg002.html",
            article(
                "England edge Argentina",
                "England led 10-6 at the break and held on to win 25-18.",
                &["Hodg004.html", "Hodg003.html"],
            ),
        ),
        (
            "Hodg003.html",
            article(
                "All Blacks cruise",
                "New Zealand beat South Africa 36-7 in Auckland.",
                &["Hodg004.html"],
            ),
        ),
        (
            "Hodg004.html",
            article(
                "South Africa respond",
                "South Africa drew 20-20 with England, whose late try levelled it.",
                &["../archive/Hodg005.html"],
            ),
        ),
        (
            "../archive/Hodg005.html",
            article(
                "Archive: England in 2003",
                "England won the final 20-17 after extra time.",
                &[],
            ),
        ),
    ];

    let mut fetcher = MemoryFetcher::new();
    for (name, html) in pages {
        let url = url::Url::parse(BASE).unwrap().join(name).unwrap();
        fetcher.insert(url.to_string(), html);
    }
    fetcher
}

fn manager(dir: &std::path::Path, max_visits: usize) -> PipelineManager {
    let config = CrawlConfig {
        seed_url: format!("{}Hodg001.html", BASE),
        max_visits,
        fault_policy: FaultPolicy::Abort,
        ..CrawlConfig::default()
    };
    let storage = CsvStorage::new(OutputConfig::with_dir(dir)).unwrap();
    PipelineManager::new(
        Arc::new(site()),
        Box::new(storage),
        config,
        Roster::from_json_str(ROSTER).unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_full_pipeline_through_csv() {
    let temp_dir = tempdir().unwrap();
    let mut manager = manager(temp_dir.path(), 999);

    let (summary, charts) = manager.run_all(&TextChart::default()).await.unwrap();
    assert_eq!(summary.crawl.visited, 5);
    assert_eq!(summary.articles, 4);
    assert_eq!(summary.teams, 3);

    let pages = fs::read_to_string(temp_dir.path().join("pages.csv")).unwrap();
    let urls: Vec<_> = pages.lines().skip(1).map(|l| l.split(',').next().unwrap()).collect();
    assert_eq!(
        urls,
        [
            "http://rugby.test/main/Hodg001.html",
            "http://rugby.test/main/Hodg002.html",
            "http://rugby.test/main/Hodg003.html",
            "http://rugby.test/main/Hodg004.html",
            "http://rugby.test/archive/Hodg005.html",
        ]
    );

    let articles = fs::read_to_string(temp_dir.path().join("articles.csv")).unwrap();
    let mut lines = articles.lines();
    assert_eq!(lines.next(), Some("url,headline,team,score"));
    assert_eq!(
        lines.next(),
        Some("http://rugby.test/main/Hodg002.html,England edge Argentina,England,25-18")
    );

    let stats = manager.storage().read_stats().unwrap();
    assert_eq!(
        stats,
        vec![
            TeamStat { team: "England".to_string(), avg_game_difference: 5.0 },
            TeamStat { team: "New Zealand".to_string(), avg_game_difference: 29.0 },
            TeamStat { team: "South Africa".to_string(), avg_game_difference: 0.0 },
        ]
    );

    assert_eq!(charts.len(), 2);
    assert!(charts[0].contents.contains("England"));
}

#[tokio::test]
async fn test_cap_limits_pipeline() {
    let temp_dir = tempdir().unwrap();
    let mut manager = manager(temp_dir.path(), 2);

    let crawl = manager.crawl().await.unwrap();
    assert_eq!(crawl.visited, 2);

    let records = manager.classify().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].score, "25-18");
}
