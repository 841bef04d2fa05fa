//! Report orchestration: fetch, extract, render, write.
//!
//! The document source is injected as a plain function so a run can be
//! driven by an HTTP client, a saved page, or a test fixture alike. Each step
//! finishes before the next begins and nothing is written unless every entry
//! on the page extracted cleanly.
//!
//! # Example
//!
//! ```rust
//! use arxiv_digest_core::{PipelineConfig, ReportOutcome, ReportRequest, run_report};
//! use time::macros::date;
//!
//! let request = ReportRequest::new("robotics", date!(2024 - 01 - 01), date!(2024 - 01 - 02)).unwrap();
//! let outcome = run_report(&request, &PipelineConfig::default(), |_url| {
//!     Ok("<html><body><p>No results</p></body></html>".to_string())
//! })
//! .unwrap();
//!
//! assert_eq!(outcome, ReportOutcome::NoRecords);
//! ```

use std::fs;
use std::path::PathBuf;

use url::Url;

use crate::formatters::{JsonConfig, TableConfig, records_to_json, render_table};
use crate::page::{PageOutcome, extract_page};
use crate::parse::Document;
use crate::query::{ReportFormat, ReportRequest, SearchConfig};
use crate::record::Record;
use crate::{DigestError, Result};

/// Settings for one report run.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Remote search parameters.
    pub search: SearchConfig,
    /// Directory the report is written into; the working directory if unset.
    pub output_dir: Option<PathBuf>,
    /// Report file format.
    pub format: ReportFormat,
    /// Markdown table options.
    pub table: TableConfig,
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The report was written to `path` with `records` rows.
    Written { path: PathBuf, records: usize },
    /// The page had no result entries; nothing was written.
    NoRecords,
}

/// Renders records in the requested format.
pub fn render_report(records: &[Record], format: ReportFormat, table: &TableConfig) -> Result<String> {
    match format {
        ReportFormat::Markdown => Ok(render_table(records, table)),
        ReportFormat::Json => records_to_json(records, &JsonConfig::default()),
    }
}

/// Runs one report: builds the search URL from `request`, hands it to
/// `fetch`, extracts the records, and writes the rendered report.
///
/// # Errors
///
/// - [`DigestError::OutputDirNotFound`] if `config.output_dir` is not an
///   existing directory. This is checked before fetching.
/// - Whatever `fetch` returns, unchanged.
/// - [`DigestError::MissingField`] if any entry lacks a required field.
/// - [`DigestError::WriteError`] if the report cannot be written.
pub fn run_report<F>(request: &ReportRequest, config: &PipelineConfig, fetch: F) -> Result<ReportOutcome>
where
    F: FnOnce(&Url) -> Result<String>,
{
    if let Some(dir) = &config.output_dir
        && !dir.is_dir()
    {
        return Err(DigestError::OutputDirNotFound(dir.clone()));
    }

    let url = request.search_url(&config.search)?;
    tracing::debug!(%url, "fetching results page");
    let html = fetch(&url)?;

    let doc = Document::parse(&html)?;
    let records = match extract_page(&doc)? {
        PageOutcome::Records(records) => records,
        PageOutcome::Empty => {
            tracing::info!(query = request.query(), "no records on results page");
            return Ok(ReportOutcome::NoRecords);
        }
    };

    let content = render_report(&records, config.format, &config.table)?;

    let filename = request.report_filename(config.format);
    let path = match &config.output_dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    };

    fs::write(&path, content)?;
    tracing::info!(path = %path.display(), records = records.len(), "report written");

    Ok(ReportOutcome::Written { path, records: records.len() })
}
