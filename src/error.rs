//! Error types for the fetch and configuration layers.
//!
//! Extraction itself never fails: a missing title, body or author is reported
//! through the [`ArticleRecord`](crate::ArticleRecord) values instead.

use thiserror::Error;

/// Result type alias for newscrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while fetching a page or configuring the extractor
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// URL is malformed or lacks an http(s) scheme and host
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// Request did not complete within the configured timeout
    #[error("Request timeout after {seconds} seconds: {url}")]
    Timeout { url: String, seconds: u64 },

    /// Host could not be reached
    #[error("Connection error while accessing {0}")]
    Connection(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    /// Any other transport or body decoding failure
    #[error("Request failed: {0}")]
    Request(String),

    /// A user-supplied selector could not be parsed
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}
