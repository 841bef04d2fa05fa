pub mod date;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod locator;
pub mod page;
pub mod parse;
pub mod pipeline;
pub mod query;
pub mod record;

pub use date::{first_submitted_date, format_iso_date, parse_submitted_date};
pub use error::{DigestError, RecordField, Result};
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{fetch_file, fetch_stdin};
pub use formatters::{JsonConfig, JsonFormatter, TableConfig, TableFormatter, records_to_json, render_table};
pub use locator::{ArxivLocator, ArxivSchema, FieldLocator};
pub use page::{PageOutcome, extract_html, extract_page, extract_page_with};
pub use parse::{Document, Element};
pub use pipeline::{PipelineConfig, ReportOutcome, render_report, run_report};
pub use query::{PAGE_SIZES, ReportFormat, ReportRequest, SearchConfig, SearchConfigBuilder};
pub use record::{Record, extract_record};
