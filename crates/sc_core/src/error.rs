use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or HTTP failure while retrieving a page.
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// An expected element (headline, body) is missing from a page.
    #[error("No {element} element found on {url}")]
    ExtractionAbsent { url: String, element: String },

    /// A stored score did not parse as `A-B`. The score extractor only ever
    /// produces well-formed scores, so this means the data was corrupted
    /// between stages.
    #[error("Malformed score: {0:?}")]
    MalformedScore(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Error::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn absent(url: impl Into<String>, element: impl Into<String>) -> Self {
        Error::ExtractionAbsent {
            url: url.into(),
            element: element.into(),
        }
    }

    /// True for faults scoped to a single page, which the skip policy may
    /// recover from.
    pub fn is_page_fault(&self) -> bool {
        matches!(self, Error::Fetch { .. } | Error::ExtractionAbsent { .. } | Error::Http(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
