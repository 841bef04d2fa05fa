//! Error types for digest operations.
//!
//! This module defines [`DigestError`], which covers every way a report run
//! can fail: fetching the results page, locating required fields in it,
//! validating the request, and writing the report to disk.
//!
//! Missing *optional* fields are never errors; they surface as empty values
//! on the [`Record`](crate::Record) instead.
//!
//! # Example
//!
//! ```rust
//! use arxiv_digest_core::{DigestError, RecordField};
//!
//! let err = DigestError::MissingField { position: 3, field: RecordField::Link };
//! assert!(err.to_string().contains("entry 3"));
//! ```

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A field that must be present for an entry to become a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Title,
    Identifier,
    Link,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordField::Title => "title",
            RecordField::Identifier => "identifier",
            RecordField::Link => "link",
        };
        f.write_str(name)
    }
}

/// Main error type for report runs.
///
/// # Example
///
/// ```rust
/// use arxiv_digest_core::{DigestError, PageOutcome, extract_page, Document};
///
/// let doc = Document::parse(r#"<li class="arxiv-result"></li>"#).unwrap();
/// match extract_page(&doc) {
///     Ok(PageOutcome::Records(records)) => println!("{} records", records.len()),
///     Ok(PageOutcome::Empty) => println!("no entries"),
///     Err(DigestError::MissingField { position, field }) => {
///         println!("entry {} has no {}", position, field);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum DigestError {
    /// HTTP request errors from reqwest.
    ///
    /// Covers DNS failures, refused connections and body decoding problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The server answered, but not with a success status.
    #[error("Request to {url} returned status {status}")]
    HttpStatus { status: u16, url: String },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, in practice an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// A result entry lacks one of its required fields.
    ///
    /// `position` is the 1-based index of the entry in document order.
    /// This aborts the whole page; no partial report is produced.
    #[error("Result entry {position} is missing its {field}")]
    MissingField { position: usize, field: RecordField },

    /// The report request cannot be turned into a search.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// The requested output directory does not exist or is not a directory.
    #[error("Output directory not found: {0}")]
    OutputDirNotFound(PathBuf),

    /// File read/write errors.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),

    /// JSON serialization of records failed.
    #[error("Failed to serialize records: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Result type alias for DigestError.
pub type Result<T> = std::result::Result<T, DigestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DigestError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_missing_field_names_position_and_field() {
        let err = DigestError::MissingField { position: 2, field: RecordField::Identifier };
        assert_eq!(err.to_string(), "Result entry 2 is missing its identifier");
    }

    #[test]
    fn test_http_status_error() {
        let err = DigestError::HttpStatus { status: 503, url: "https://arxiv.org/search/cs".to_string() };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("arxiv.org"));
    }

    #[test]
    fn test_timeout_error() {
        let err = DigestError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }
}
