use sc_core::{Error, Result, SelectorConfig};
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// Compiled selectors for the elements the pipeline reads.
#[derive(Debug, Clone)]
pub struct PageSelectors {
    pub headline: Selector,
    pub body: Selector,
    links: Selector,
}

impl PageSelectors {
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            headline: parse_selector(&config.headline)?,
            body: parse_selector(&config.body)?,
            links: parse_selector("a[href]")?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| Error::Config(format!("Invalid selector {:?}: {}", selector, e)))
}

/// A parsed HTML page.
///
/// `Html` is not `Send`, so a `Document` is built and consumed without an
/// `.await` in between.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// All text under the first element matching `selector`.
    pub fn select_text(&self, selector: &Selector) -> Option<String> {
        self.html
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    pub fn find_headline(&self, selectors: &PageSelectors) -> Option<String> {
        self.select_text(&selectors.headline)
            .map(|text| text.trim().to_string())
    }

    pub fn find_article_body(&self, selectors: &PageSelectors) -> Option<String> {
        self.select_text(&selectors.body)
    }

    /// Every `href` in document order, unresolved.
    pub fn outbound_links(&self, selectors: &PageSelectors) -> Vec<String> {
        self.html
            .select(&selectors.links)
            .filter_map(|el| el.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}

/// Resolves `href` against `base` and normalizes the result. Returns `None`
/// for hrefs that do not resolve to an http(s) page.
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let mut url = match base.join(href.trim()) {
        Ok(url) => url,
        Err(e) => {
            debug!("Ignoring link {:?} on {}: {}", href, base, e);
            return None;
        }
    };
    if !matches!(url.scheme(), "http" | "https") {
        debug!("Ignoring non-http link {} on {}", url, base);
        return None;
    }
    url.set_fragment(None);
    Some(url)
}
