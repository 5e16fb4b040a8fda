use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use sc_core::{Error, FetchConfig, PageFetcher, Result};
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

/// Fetches pages over HTTP, one request at a time.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    async fn fetch_once(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::fetch(url.as_str(), describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(url.as_str(), format!("HTTP status {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| Error::fetch(url.as_str(), describe(&e)))
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("timed out: {}", err)
    } else {
        err.to_string()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => {
                    debug!("Fetched {} ({} bytes)", url, body.len());
                    return Ok(body);
                }
                Err(e) if attempt < self.config.retries => {
                    attempt += 1;
                    warn!("{}, retrying {}/{}...", e, attempt, self.config.retries);
                    sleep(self.config.retry_backoff * attempt).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Serves pages from a fixed map. Unknown URLs fail like a 404.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    pages: HashMap<String, String>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.insert(url, html);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }
}

#[async_trait]
impl PageFetcher for MemoryFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| Error::fetch(url.as_str(), "HTTP status 404 Not Found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_memory_fetcher() {
        let fetcher =
            MemoryFetcher::new().with_page("http://a.test/main/index.html", "<h1>hi</h1>");
        let url = Url::parse("http://a.test/main/index.html").unwrap();
        assert_eq!(fetcher.fetch(&url).await.unwrap(), "<h1>hi</h1>");

        let missing = Url::parse("http://a.test/main/missing.html").unwrap();
        let err = fetcher.fetch(&missing).await.unwrap_err();
        assert!(err.is_page_fault());
    }

    #[tokio::test]
    async fn test_http_fetcher_connection_failure() {
        let fetcher = HttpFetcher::new(FetchConfig {
            timeout: Duration::from_millis(500),
            retries: 1,
            retry_backoff: Duration::from_millis(10),
            ..FetchConfig::default()
        })
        .unwrap();
        // Nothing listens on the discard port.
        let url = Url::parse("http://127.0.0.1:9/").unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }
}
