pub mod config;
pub mod error;
pub mod fetch;
pub mod storage;
pub mod types;

pub use config::{CrawlConfig, FaultPolicy, FetchConfig, OutputConfig, SelectorConfig};
pub use error::{Error, Result};
pub use fetch::PageFetcher;
pub use storage::RecordStorage;
pub use types::{ArticleRecord, ScoreLine, TeamStat, VisitedPage};
