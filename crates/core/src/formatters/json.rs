use crate::Result;
use crate::record::Record;
use serde::Serialize;

/// Complete JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Number of records
    pub count: usize,
    /// Records in page order
    pub records: &'a [Record],
}

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Serialize records as a JSON document with a `count` and a `records` array.
pub fn records_to_json(records: &[Record], config: &JsonConfig) -> Result<String> {
    let output = JsonOutput { count: records.len(), records };

    let json = if config.pretty { serde_json::to_string_pretty(&output)? } else { serde_json::to_string(&output)? };

    Ok(json)
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, records: &[Record]) -> Result<String> {
        records_to_json(records, &self.config)
    }
}
