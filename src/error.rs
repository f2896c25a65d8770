use ::scraper::error::SelectorErrorKind;
use std::num::ParseIntError;

/// All errors that can occur while scraping match results and overviews.
#[derive(thiserror::Error, Debug)]
pub enum VlrError {
    /// A request URL could not be built from the base URL, path and query.
    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// Failed to parse an integer from scraped text.
    #[error("failed to parse integer: {0}")]
    IntParse(#[from] ParseIntError),

    /// An expected HTML element was not found on the page.
    #[error("expected element not found: {context}")]
    ElementNotFound { context: &'static str },

    /// The player cell did not contain exactly a player name and an org tag.
    #[error("player cell {text:?} is not of the form \"<name> <org>\"")]
    PlayerCell { text: String },

    /// A player row carried the wrong number of values for one side.
    #[error("expected {expected} stat values for side {side}, found {found}")]
    StatCount {
        side: &'static str,
        expected: usize,
        found: usize,
    },

    /// Writing the CSV output failed.
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error while writing output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl<'a> From<SelectorErrorKind<'a>> for VlrError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        VlrError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VlrError>;
