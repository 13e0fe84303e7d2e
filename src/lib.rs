//! Sitebrief: bounded website crawling and text compression
//!
//! This crate crawls a small, bounded set of pages within a single website,
//! extracts structural text (title, headers, paragraphs), and compresses it
//! into ranked lists of the most frequent content-bearing words. The result
//! is a compact per-page brief suitable as prompt context for an LLM call.

pub mod compress;
pub mod config;
pub mod crawler;
pub mod llm;
pub mod nlp;

use thiserror::Error;

/// Main error type for sitebrief operations
#[derive(Debug, Error)]
pub enum SitebriefError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Crawl error: {0}")]
    Crawl(#[from] CrawlError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Per-page fetch failures, classified narrowly.
///
/// `InvalidUrl` is the one non-transient variant: it marks a malformed
/// candidate (usually a bad `href` concatenation) rather than a network
/// condition, and callers report it more loudly than the others.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}")]
    Connect { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request error for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    /// Whether this failure is a transient network condition (as opposed to
    /// a malformed URL, which points at the candidate list itself).
    pub fn is_transient(&self) -> bool {
        !matches!(self, FetchError::InvalidUrl { .. })
    }
}

/// Crawl-level errors
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The initial fetch of the start URL failed. This is the single fatal
    /// condition: no partial result is produced.
    #[error("Initial fetch of {url} failed: {source}")]
    RootFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// LLM client errors
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("LLM endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for sitebrief operations
pub type Result<T> = std::result::Result<T, SitebriefError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for crawl operations
pub type CrawlResult<T> = std::result::Result<T, CrawlError>;

// Re-export commonly used types
pub use compress::{HeaderSummary, PageBrief, TextCompressor, WordCount};
pub use config::Config;
pub use crawler::{PageRecord, SiteCrawler};
pub use llm::LlmClient;
pub use nlp::{HeuristicTagger, PosClass, TaggedToken, Tagger};
