//! Report requests and the search they translate to.
//!
//! A [`ReportRequest`] names what to look for and over which inclusive date
//! range. [`SearchConfig`] holds the fixed knobs of the remote search page.
//! Together they produce the search URL and the report filename.
//!
//! # Example
//!
//! ```rust
//! use arxiv_digest_core::{ReportFormat, ReportRequest, SearchConfig};
//! use time::macros::date;
//!
//! let request = ReportRequest::new("graph neural networks", date!(2024 - 03 - 01), date!(2024 - 03 - 31)).unwrap();
//! let url = request.search_url(&SearchConfig::default()).unwrap();
//!
//! assert!(url.as_str().contains("query=graph+neural+networks"));
//! assert_eq!(request.report_filename(ReportFormat::Markdown), "2024-03-01_to_2024-03-31-report.md");
//! ```

use std::str::FromStr;

use time::Date;
use url::Url;

use crate::date::format_iso_date;
use crate::{DigestError, Result};

/// Page sizes the search page accepts.
pub const PAGE_SIZES: [u32; 4] = [25, 50, 100, 200];

/// What to search for and over which submission dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    query: String,
    from: Date,
    to: Date,
}

impl ReportRequest {
    /// Creates a request for `query` submitted between `from` and `to`,
    /// both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidRequest`] when the query is blank or
    /// `from` falls after `to`.
    pub fn new(query: impl Into<String>, from: Date, to: Date) -> Result<Self> {
        let query = query.into().trim().to_string();
        if query.is_empty() {
            return Err(DigestError::InvalidRequest("query must not be empty".to_string()));
        }
        if from > to {
            return Err(DigestError::InvalidRequest(format!(
                "from date {} is after to date {}",
                format_iso_date(from),
                format_iso_date(to)
            )));
        }
        Ok(Self { query, from, to })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn from(&self) -> Date {
        self.from
    }

    pub fn to(&self) -> Date {
        self.to
    }

    /// Builds the search URL for this request.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidUrl`] if the configured base URL does not
    /// parse, and [`DigestError::InvalidRequest`] for an unsupported page size.
    pub fn search_url(&self, config: &SearchConfig) -> Result<Url> {
        if !PAGE_SIZES.contains(&config.page_size) {
            return Err(DigestError::InvalidRequest(format!(
                "page size {} is not one of {:?}",
                config.page_size, PAGE_SIZES
            )));
        }

        let mut url = Url::parse(&config.base_url).map_err(|e| DigestError::InvalidUrl(e.to_string()))?;
        let size = config.page_size.to_string();
        let abstracts = if config.show_abstracts { "show" } else { "hide" };

        url.query_pairs_mut()
            .clear()
            .append_pair("query", &self.query)
            .append_pair("searchtype", "all")
            .append_pair("abstracts", abstracts)
            .append_pair("order", &config.order)
            .append_pair("size", &size)
            .append_pair("date-filter_by", "date_range")
            .append_pair("date-from_date", &format_iso_date(self.from))
            .append_pair("date-to_date", &format_iso_date(self.to))
            .append_pair("date-date_type", "submitted_date");

        Ok(url)
    }

    /// Report filename derived from the date range,
    /// `<from>_to_<to>-report.<ext>`.
    pub fn report_filename(&self, format: ReportFormat) -> String {
        format!(
            "{}_to_{}-report.{}",
            format_iso_date(self.from),
            format_iso_date(self.to),
            format.extension()
        )
    }
}

/// Output format of a report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Markdown table.
    #[default]
    Markdown,
    /// JSON document with the records.
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: markdown, json", s)),
        }
    }
}

/// Configuration of the remote search page.
///
/// # Example
///
/// ```rust
/// use arxiv_digest_core::SearchConfig;
///
/// let config = SearchConfig::builder().page_size(50).show_abstracts(true).build();
/// assert_eq!(config.page_size, 50);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search endpoint (default: `https://arxiv.org/search/cs`).
    pub base_url: String,

    /// Results per page, one of [`PAGE_SIZES`] (default: 200).
    pub page_size: u32,

    /// Ask for abstracts in the listing (default: true).
    pub show_abstracts: bool,

    /// Sort order (default: `-submitted_date`, newest first).
    pub order: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://arxiv.org/search/cs".to_string(),
            page_size: 200,
            show_abstracts: true,
            order: "-submitted_date".to_string(),
        }
    }
}

impl SearchConfig {
    /// Creates a new builder for SearchConfig.
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }
}

/// Builder for SearchConfig.
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: SearchConfig::default() }
    }

    /// Sets the search endpoint.
    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.config.base_url = value.into();
        self
    }

    /// Sets the number of results per page.
    pub fn page_size(mut self, value: u32) -> Self {
        self.config.page_size = value;
        self
    }

    /// Sets whether abstracts are requested.
    pub fn show_abstracts(mut self, value: bool) -> Self {
        self.config.show_abstracts = value;
        self
    }

    /// Sets the sort order.
    pub fn order(mut self, value: impl Into<String>) -> Self {
        self.config.order = value.into();
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
