//! Bibliographic records and the per-entry extractor.
//!
//! A [`Record`] is built once from one result entry and never changes
//! afterwards. Title, identifier and link are required; everything else
//! degrades to an empty value when the markup lacks it.

use serde::{Serialize, Serializer};
use time::Date;

use crate::date::{first_submitted_date, format_iso_date};
use crate::error::RecordField;
use crate::locator::FieldLocator;

/// One extracted search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Paper title, trimmed and never empty.
    pub title: String,

    /// Author names in the order they appear on the page.
    pub authors: Vec<String>,

    /// Short identifier such as `2401.00001`.
    pub identifier: String,

    /// Canonical URL of the record page.
    pub link: String,

    /// Category labels in page order, e.g. `cs.AI`.
    pub tags: Vec<String>,

    /// Truncated abstract as shown before expansion. Empty when absent.
    pub abstract_short: String,

    /// Complete abstract. Empty when absent.
    pub abstract_full: String,

    /// First submission date, or `None` if the submission block was missing
    /// or its date did not match the expected format.
    #[serde(serialize_with = "serialize_date")]
    pub submitted_date: Option<Date>,
}

fn serialize_date<S: Serializer>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.serialize_str(&format_iso_date(*date)),
        None => serializer.serialize_none(),
    }
}

impl Record {
    /// Submission date as `YYYY-MM-DD`, or an empty string when absent.
    pub fn submitted_display(&self) -> String {
        self.submitted_date.map(format_iso_date).unwrap_or_default()
    }
}

/// Builds a [`Record`] from whatever a [`FieldLocator`] can find.
///
/// Fails with the first required field that is missing, checked in the order
/// title, link, identifier.
///
/// # Example
///
/// ```rust
/// use arxiv_digest_core::{ArxivSchema, Document, RecordField, extract_record};
///
/// let html = r#"<ol><li class="arxiv-result">
///     <p class="title is-5 mathjax">Untitled draft</p>
/// </li></ol>"#;
/// let doc = Document::parse(html).unwrap();
/// let schema = ArxivSchema::new().unwrap();
/// let entry = schema.entries(&doc).remove(0);
///
/// assert_eq!(extract_record(&schema.locate(entry)), Err(RecordField::Link));
/// ```
pub fn extract_record<L: FieldLocator + ?Sized>(locator: &L) -> Result<Record, RecordField> {
    let title = locator.title().ok_or(RecordField::Title)?;
    let link = locator.link().ok_or(RecordField::Link)?;
    let identifier = locator.identifier().ok_or(RecordField::Identifier)?;

    let submitted_date = match locator.submission_info() {
        Some(block) => {
            let date = first_submitted_date(&block);
            if date.is_none() {
                tracing::warn!(identifier = %identifier, block = %block, "unrecognised submission date");
            }
            date
        }
        None => None,
    };

    Ok(Record {
        title,
        authors: locator.authors(),
        identifier,
        link,
        tags: locator.tags(),
        abstract_short: locator.abstract_short().unwrap_or_default(),
        abstract_full: locator.abstract_full().unwrap_or_default(),
        submitted_date,
    })
}
