use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use sc_core::{CrawlConfig, Error, FaultPolicy, PageFetcher, Result, VisitedPage};
use tracing::{debug, info, warn};
use url::Url;

use crate::extract::{extract_page, PageContent};
use crate::parser::{resolve_link, PageSelectors};

/// A page dropped under [`FaultPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFault {
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Visited(String),
    AlreadyVisited(String),
    Failed(String),
    /// Nothing left to visit.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub visited: usize,
    pub faults: usize,
    /// URLs still queued when the crawl stopped.
    pub pending: usize,
}

/// Breadth-first traversal state for one crawl run.
///
/// Each URL is visited at most once and is never queued twice. Pages are
/// recorded in visit order.
pub struct Frontier {
    fetcher: Arc<dyn PageFetcher>,
    selectors: PageSelectors,
    policy: FaultPolicy,
    queue: VecDeque<Url>,
    queued: HashSet<String>,
    visited: Vec<VisitedPage>,
    visited_urls: HashSet<String>,
    faults: Vec<PageFault>,
    faulted_urls: HashSet<String>,
}

impl Frontier {
    pub fn new(fetcher: Arc<dyn PageFetcher>, config: &CrawlConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            selectors: PageSelectors::new(&config.selectors)?,
            policy: config.fault_policy,
            queue: VecDeque::new(),
            queued: HashSet::new(),
            visited: Vec::new(),
            visited_urls: HashSet::new(),
            faults: Vec::new(),
            faulted_urls: HashSet::new(),
        })
    }

    /// Visits the seed page and queues every page it links to, other than
    /// the seed itself. Any failure here is fatal regardless of policy.
    pub async fn initialize(&mut self, seed_url: &str) -> Result<()> {
        let mut seed = Url::parse(seed_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", seed_url, e)))?;
        seed.set_fragment(None);

        let content = self.visit(&seed).await?;
        info!("🌱 Seed {} - {}", seed, self.visited[0].headline);

        let mut enqueued = 0;
        for href in &content.links {
            let Some(url) = resolve_link(&seed, href) else {
                continue;
            };
            if url == seed {
                debug!("Skipping self-link {:?} on seed", href);
                continue;
            }
            if self.enqueue(url) {
                enqueued += 1;
            }
        }
        debug!("Queued {} links from seed", enqueued);
        Ok(())
    }

    /// Visits the next queued page, if any, and queues its unseen links
    /// resolved against that page's own URL.
    pub async fn step(&mut self) -> Result<StepOutcome> {
        let Some(url) = self.queue.pop_front() else {
            return Ok(StepOutcome::Exhausted);
        };
        self.queued.remove(url.as_str());

        if self.visited_urls.contains(url.as_str()) {
            return Ok(StepOutcome::AlreadyVisited(url.into()));
        }

        let content = match self.visit(&url).await {
            Ok(content) => content,
            Err(e) if e.is_page_fault() && self.policy == FaultPolicy::Skip => {
                warn!("⚠️ Skipping {}: {}", url, e);
                self.faulted_urls.insert(url.to_string());
                self.faults.push(PageFault {
                    url: url.to_string(),
                    error: e.to_string(),
                });
                return Ok(StepOutcome::Failed(url.into()));
            }
            Err(e) => return Err(e),
        };

        let mut enqueued = 0;
        for href in &content.links {
            if let Some(link) = resolve_link(&url, href) {
                if self.enqueue(link) {
                    enqueued += 1;
                }
            }
        }
        debug!("Visited {} (+{} queued, {} pending)", url, enqueued, self.queue.len());
        Ok(StepOutcome::Visited(url.into()))
    }

    /// Steps until the queue runs dry or `max_visits` pages have been
    /// visited. Reaching the cap is a normal stop.
    pub async fn run(&mut self, max_visits: usize) -> Result<CrawlSummary> {
        if max_visits == 0 {
            return Err(Error::Config("max_visits must be at least 1".to_string()));
        }
        while self.visited.len() < max_visits {
            if self.step().await? == StepOutcome::Exhausted {
                break;
            }
        }

        let summary = self.summary();
        info!(
            "🕸️ Crawl finished: {} visited, {} skipped, {} still queued",
            summary.visited, summary.faults, summary.pending
        );
        Ok(summary)
    }

    async fn visit(&mut self, url: &Url) -> Result<PageContent> {
        let html = self.fetcher.fetch(url).await?;
        let content = extract_page(url, &html, &self.selectors)?;
        self.visited_urls.insert(url.to_string());
        self.visited.push(VisitedPage {
            url: url.to_string(),
            headline: content.headline.clone(),
        });
        Ok(content)
    }

    fn enqueue(&mut self, url: Url) -> bool {
        let key = url.as_str();
        if self.visited_urls.contains(key)
            || self.queued.contains(key)
            || self.faulted_urls.contains(key)
        {
            return false;
        }
        self.queued.insert(key.to_string());
        self.queue.push_back(url);
        true
    }

    pub fn summary(&self) -> CrawlSummary {
        CrawlSummary {
            visited: self.visited.len(),
            faults: self.faults.len(),
            pending: self.queue.len(),
        }
    }

    /// Visited pages in visit order.
    pub fn visited(&self) -> &[VisitedPage] {
        &self.visited
    }

    pub fn faults(&self) -> &[PageFault] {
        &self.faults
    }
}
