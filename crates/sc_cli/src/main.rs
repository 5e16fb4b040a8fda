use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use sc_core::config::{DEFAULT_MAX_VISITS, DEFAULT_SEED_URL};
use sc_core::{CrawlConfig, FaultPolicy, FetchConfig, OutputConfig, SelectorConfig};
use sc_crawler::{
    handle_command, init_logging, HttpFetcher, PipelineArgs, PipelineCommands, PipelineManager,
};
use sc_stats::{ChartRenderer, TextChart};
use sc_storage::Roster;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Crawl match reports and summarize team results",
    long_about = None
)]
struct Cli {
    /// First page of the crawl
    #[arg(long, default_value = DEFAULT_SEED_URL)]
    seed_url: String,
    /// Stop after this many pages have been visited
    #[arg(long, default_value_t = DEFAULT_MAX_VISITS)]
    max_visits: usize,
    /// JSON file listing known teams: {"teams": [{"name": ...}]}
    #[arg(long, default_value = "rugby.json")]
    roster: PathBuf,
    /// Directory for the CSV tables and rendered charts
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Storage backend: csv or memory
    #[arg(long, default_value = "csv")]
    storage: String,
    /// What to do when a page cannot be fetched or parsed: abort or skip
    #[arg(long, default_value = "abort")]
    on_fault: FaultPolicy,
    /// Per-request timeout (e.g. 30s, 1m)
    #[arg(long, default_value = "30s", value_parser = humantime::parse_duration)]
    timeout: Duration,
    /// Extra attempts per page after a failed fetch
    #[arg(long, default_value_t = 0)]
    retries: u32,
    #[arg(long, default_value = "h1.headline")]
    headline_selector: String,
    #[arg(long, default_value = "div#article_detail")]
    body_selector: String,
    /// Log debug events
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<PipelineCommands>,
}

impl Cli {
    fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            seed_url: self.seed_url.clone(),
            max_visits: self.max_visits,
            fault_policy: self.on_fault,
            selectors: SelectorConfig {
                headline: self.headline_selector.clone(),
                body: self.body_selector.clone(),
            },
            fetch: FetchConfig {
                timeout: self.timeout,
                retries: self.retries,
                ..FetchConfig::default()
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let logger = init_logging(if cli.verbose { Level::DEBUG } else { Level::INFO });
    let command = cli.command.unwrap_or_default();

    let config = cli.crawl_config();
    let output = OutputConfig::with_dir(&cli.out_dir);
    let storage = sc_storage::create_storage(&cli.storage, &output)?;
    info!("🏦 Storage initialized (using {})", cli.storage);

    let roster = if command.needs_roster() {
        Roster::from_path(&cli.roster)
            .with_context(|| format!("Failed to load roster from {}", cli.roster.display()))?
    } else {
        Roster::default()
    };

    let fetcher = Arc::new(HttpFetcher::new(config.fetch.clone())?);
    let mut manager = PipelineManager::new(fetcher, storage, config, roster)?.with_logger(logger);

    let renderer = TextChart::default();
    let charts = handle_command(PipelineArgs { command }, &mut manager, &renderer).await?;

    for chart in charts {
        let path = output.dir.join(format!("{}.{}", chart.name, renderer.extension()));
        std::fs::write(&path, &chart.contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("{}", chart.contents);
        info!("🖼️ Wrote {}", path.display());
    }

    Ok(())
}
