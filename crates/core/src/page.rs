//! Whole-page extraction.
//!
//! [`extract_page`] finds every result entry in a search results document and
//! turns each one into a [`Record`], keeping document order. A page with no
//! entries at all is reported as [`PageOutcome::Empty`] so callers can stop
//! cleanly; a single malformed entry fails the whole page.

use crate::locator::ArxivSchema;
use crate::parse::Document;
use crate::record::{Record, extract_record};
use crate::{DigestError, Result};

/// What a results page contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Records in document order. Never empty.
    Records(Vec<Record>),
    /// The document had no result entry nodes.
    Empty,
}

impl PageOutcome {
    /// Number of records, zero for [`PageOutcome::Empty`].
    pub fn len(&self) -> usize {
        match self {
            PageOutcome::Records(records) => records.len(),
            PageOutcome::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PageOutcome::Empty)
    }

    /// Records of the page, `None` when it had no entries.
    pub fn into_records(self) -> Option<Vec<Record>> {
        match self {
            PageOutcome::Records(records) => Some(records),
            PageOutcome::Empty => None,
        }
    }
}

/// Extracts every record from a parsed results page.
///
/// # Errors
///
/// Returns [`DigestError::MissingField`] for the first entry lacking a title,
/// link or identifier. Its `position` is 1-based in document order.
///
/// # Example
///
/// ```rust
/// use arxiv_digest_core::{Document, PageOutcome, extract_page};
///
/// let doc = Document::parse("<html><body><p>Sorry, your query returned no results</p></body></html>").unwrap();
/// assert_eq!(extract_page(&doc).unwrap(), PageOutcome::Empty);
/// ```
pub fn extract_page(doc: &Document) -> Result<PageOutcome> {
    let schema = ArxivSchema::new()?;
    extract_page_with(doc, &schema)
}

/// Same as [`extract_page`] with an already compiled schema.
pub fn extract_page_with(doc: &Document, schema: &ArxivSchema) -> Result<PageOutcome> {
    let entries = schema.entries(doc);
    if entries.is_empty() {
        tracing::debug!("no result entries in document");
        return Ok(PageOutcome::Empty);
    }

    tracing::debug!(entries = entries.len(), "extracting result entries");

    let records = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            extract_record(&schema.locate(entry))
                .map_err(|field| DigestError::MissingField { position: index + 1, field })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PageOutcome::Records(records))
}

/// Parses `html` and extracts its records.
pub fn extract_html(html: &str) -> Result<PageOutcome> {
    let doc = Document::parse(html)?;
    extract_page(&doc)
}
