use std::sync::Arc;

use sc_core::{
    ArticleRecord, CrawlConfig, Error, FaultPolicy, PageFetcher, RecordStorage, Result, TeamStat,
};
use sc_stats::{aggregate, ChartRenderer, RenderedChart, Report};
use sc_storage::Roster;
use url::Url;

use crate::classify::Classifier;
use crate::extract::{extract_article, ArticleText};
use crate::frontier::{CrawlSummary, Frontier};
use crate::logging::Logger;
use crate::parser::PageSelectors;

/// Counts from a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub crawl: CrawlSummary,
    pub articles: usize,
    pub teams: usize,
}

/// Runs the crawl, classify, aggregate and report stages. Each stage reads
/// its input from and writes its output to the record storage, so stages can
/// also be run one at a time.
pub struct PipelineManager {
    fetcher: Arc<dyn PageFetcher>,
    storage: Box<dyn RecordStorage>,
    config: CrawlConfig,
    classifier: Classifier,
    selectors: PageSelectors,
    logger: Logger,
}

impl PipelineManager {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        storage: Box<dyn RecordStorage>,
        config: CrawlConfig,
        roster: Roster,
    ) -> Result<Self> {
        config.validate()?;
        let selectors = PageSelectors::new(&config.selectors)?;
        Ok(Self {
            fetcher,
            storage,
            config,
            classifier: Classifier::new(roster),
            selectors,
            logger: Logger::new(),
        })
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    pub fn storage(&self) -> &dyn RecordStorage {
        self.storage.as_ref()
    }

    /// Crawls from the seed and stores every visited page.
    pub async fn crawl(&mut self) -> Result<CrawlSummary> {
        let log = self.logger.clone().with_prefix("[crawl]");
        log.info(&format!(
            "🦗 Crawling from {} (at most {} pages)",
            self.config.seed_url, self.config.max_visits
        ));

        let mut frontier = Frontier::new(self.fetcher.clone(), &self.config)?;
        frontier.initialize(&self.config.seed_url).await?;
        let summary = frontier.run(self.config.max_visits).await?;
        for fault in frontier.faults() {
            log.warn(&format!("Skipped {}: {}", fault.url, fault.error));
        }

        self.storage.write_pages(frontier.visited())?;
        log.info(&format!("💾 Stored {} pages", summary.visited));
        Ok(summary)
    }

    /// Fetches each stored page's body and keeps the pages that name a
    /// known team and carry a score.
    pub async fn classify(&mut self) -> Result<Vec<ArticleRecord>> {
        let log = self.logger.clone().with_prefix("[classify]");
        let pages = self.storage.read_pages()?;
        log.info(&format!(
            "📰 Classifying {} pages against {} teams",
            pages.len(),
            self.classifier.roster().len()
        ));

        let mut records = Vec::new();
        for page in &pages {
            let article = match self.fetch_article(&page.url).await {
                Ok(article) => article,
                Err(e) if e.is_page_fault() && self.config.fault_policy == FaultPolicy::Skip => {
                    log.warn(&format!("⚠️ Skipping {}: {}", page.url, e));
                    continue;
                }
                Err(e) => return Err(e),
            };
            match self.classifier.classify(page, &article) {
                Some(record) => records.push(record),
                None => log.debug(&format!("Discarded {} (no team or score)", page.url)),
            }
        }

        self.storage.write_records(&records)?;
        log.info(&format!("💾 Stored {} articles", records.len()));
        Ok(records)
    }

    async fn fetch_article(&self, url: &str) -> Result<ArticleText> {
        let url = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        let html = self.fetcher.fetch(&url).await?;
        extract_article(&url, &html, &self.selectors)
    }

    /// Averages game differentials per team over the stored articles.
    pub fn aggregate(&mut self) -> Result<Vec<TeamStat>> {
        let log = self.logger.clone().with_prefix("[aggregate]");
        let records = self.storage.read_records()?;
        let stats = aggregate(&records)?;
        self.storage.write_stats(&stats)?;
        log.info(&format!("📊 Stored stats for {} teams", stats.len()));
        Ok(stats)
    }

    pub fn report(&self, renderer: &dyn ChartRenderer) -> Result<Vec<RenderedChart>> {
        let log = self.logger.clone().with_prefix("[report]");
        let records = self.storage.read_records()?;
        let stats = self.storage.read_stats()?;
        let charts = Report::build(&records, &stats).render(renderer)?;
        log.info(&format!("📈 Rendered {} charts", charts.len()));
        Ok(charts)
    }

    /// Runs every stage in order. Output of stages that completed before a
    /// fatal fault is left in storage.
    pub async fn run_all(
        &mut self,
        renderer: &dyn ChartRenderer,
    ) -> Result<(PipelineSummary, Vec<RenderedChart>)> {
        let crawl = self.crawl().await?;
        let articles = self.classify().await?.len();
        let teams = self.aggregate()?.len();
        let charts = self.report(renderer)?;
        self.logger.info(&format!(
            "✅ Done: {} pages, {} articles, {} teams",
            crawl.visited, articles, teams
        ));
        Ok((PipelineSummary { crawl, articles, teams }, charts))
    }
}
