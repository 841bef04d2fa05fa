use crate::record::Record;

/// Header row of the report table.
pub const TABLE_HEADER: &str = "| Arxiv Number | Submitted | Title | Authors | Abstract |\n";
/// Alignment row that follows the header.
pub const TABLE_DIVIDER: &str = "|--------------|-----------|-------|---------|----------|\n";

/// Configuration for the markdown table renderer
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    /// Escape `|` inside cell text. Off by default, so source text is
    /// reproduced verbatim even where it breaks the table.
    pub escape_pipes: bool,
}

/// Render records as a markdown table, one row per record in input order.
///
/// Columns are the identifier linked to its record page, the submission date
/// as `YYYY-MM-DD` (empty when unknown), the title, the authors joined with
/// `", "`, and the full abstract.
pub fn render_table(records: &[Record], config: &TableConfig) -> String {
    let mut table = String::from(TABLE_HEADER);
    table.push_str(TABLE_DIVIDER);

    for record in records {
        table.push_str(&render_row(record, config));
    }

    table
}

fn render_row(record: &Record, config: &TableConfig) -> String {
    let cell = |s: &str| if config.escape_pipes { escape_pipe(s) } else { s.to_string() };

    format!(
        "| [{}]({}) | {} | {} | {} | {} |\n",
        cell(&record.identifier),
        cell(&record.link),
        record.submitted_display(),
        cell(&record.title),
        cell(&record.authors.join(", ")),
        cell(&record.abstract_full),
    )
}

/// Escape pipe characters for Markdown tables
fn escape_pipe(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Markdown table formatter with configurable options
pub struct TableFormatter {
    config: TableConfig,
}

impl TableFormatter {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, records: &[Record]) -> String {
        render_table(records, &self.config)
    }
}
