pub mod classify;
pub mod cli;
pub mod extract;
pub mod fetcher;
pub mod frontier;
pub mod logging;
pub mod manager;
pub mod matcher;
pub mod parser;
pub mod score;

pub use classify::Classifier;
pub use cli::{handle_command, PipelineArgs, PipelineCommands};
pub use fetcher::{HttpFetcher, MemoryFetcher};
pub use frontier::{CrawlSummary, Frontier, PageFault, StepOutcome};
pub use logging::{init_logging, Logger};
pub use manager::{PipelineManager, PipelineSummary};
pub use matcher::best_match;
pub use score::extract_score;
