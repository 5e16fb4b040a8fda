use async_trait::async_trait;
use url::Url;

use crate::Result;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieve the raw text of the page at `url`.
    async fn fetch(&self, url: &Url) -> Result<String>;
}
