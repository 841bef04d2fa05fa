pub mod json;
pub mod markdown;

pub use json::{JsonConfig, JsonFormatter, records_to_json};
pub use markdown::{TableConfig, TableFormatter, render_table};
