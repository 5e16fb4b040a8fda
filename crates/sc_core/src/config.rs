use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_SEED_URL: &str = "http://comp20008-jh.eng.unimelb.edu.au:9889/main/Hodg001.html";
pub const DEFAULT_MAX_VISITS: usize = 999;

/// What the crawler does when a single page cannot be fetched or is missing
/// an expected element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultPolicy {
    /// Abort the whole run on the first fault.
    #[default]
    Abort,
    /// Log the fault, drop the page and carry on.
    Skip,
}

impl FromStr for FaultPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(FaultPolicy::Abort),
            "skip" => Ok(FaultPolicy::Skip),
            other => Err(format!("Invalid fault policy: {} (expected abort or skip)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub headline: String,
    pub body: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            headline: "h1.headline".to_string(),
            body: "div#article_detail".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Upper bound on a single request, connect to last byte.
    pub timeout: Duration,
    /// Extra attempts after the first failure.
    pub retries: u32,
    pub retry_backoff: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retries: 0,
            retry_backoff: Duration::from_secs(1),
            user_agent: concat!("sc/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    pub seed_url: String,
    pub max_visits: usize,
    pub fault_policy: FaultPolicy,
    pub selectors: SelectorConfig,
    pub fetch: FetchConfig,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_url: DEFAULT_SEED_URL.to_string(),
            max_visits: DEFAULT_MAX_VISITS,
            fault_policy: FaultPolicy::default(),
            selectors: SelectorConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl CrawlConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_visits == 0 {
            return Err(Error::Config("max_visits must be at least 1".to_string()));
        }
        url::Url::parse(&self.seed_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", self.seed_url, e)))?;
        Ok(())
    }
}

/// Where the tabular outputs of each stage live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub pages_file: String,
    pub articles_file: String,
    pub stats_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            pages_file: "pages.csv".to_string(),
            articles_file: "articles.csv".to_string(),
            stats_file: "team_stats.csv".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn pages_path(&self) -> PathBuf {
        self.dir.join(&self.pages_file)
    }

    pub fn articles_path(&self) -> PathBuf {
        self.dir.join(&self.articles_file)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.dir.join(&self.stats_file)
    }
}
