//! Library API integration tests
use arxiv_digest_core::*;
use tempfile::TempDir;
use time::macros::date;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).expect("fixture should exist")
}

fn january() -> ReportRequest {
    ReportRequest::new("Artificial Intelligence", date!(2024 - 01 - 01), date!(2024 - 01 - 10)).unwrap()
}

fn config_in(dir: &TempDir) -> PipelineConfig {
    PipelineConfig { output_dir: Some(dir.path().to_path_buf()), ..Default::default() }
}

#[test]
fn test_single_entry_record() {
    let records = extract_html(&read_fixture("single_entry.html")).unwrap().into_records().unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.title, "Deep Learning Survey");
    assert_eq!(record.authors, vec!["A. Smith", "B. Lee"]);
    assert_eq!(record.identifier, "2401.00001");
    assert_eq!(record.link, "https://arxiv.org/abs/2401.00001");
    assert_eq!(record.tags, vec!["cs.AI"]);
    assert_eq!(record.abstract_short, "We survey recent\u{2026}");
    assert_eq!(record.abstract_full, "We survey recent progress in deep learning.");
    assert_eq!(record.submitted_date, Some(date!(2024 - 01 - 05)));
}

#[test]
fn test_single_entry_end_to_end() {
    let dir = TempDir::new().unwrap();
    let html = read_fixture("single_entry.html");

    let outcome = run_report(&january(), &config_in(&dir), |_| Ok(html)).unwrap();
    let path = dir.path().join("2024-01-01_to_2024-01-10-report.md");
    assert_eq!(outcome, ReportOutcome::Written { path: path.clone(), records: 1 });

    let report = std::fs::read_to_string(path).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].contains("2024-01-05"));
    assert!(lines[2].contains("A. Smith, B. Lee"));
    assert!(lines[2].starts_with("| [2401.00001](https://arxiv.org/abs/2401.00001) |"));
}

#[test]
fn test_no_results_end_to_end() {
    let dir = TempDir::new().unwrap();
    let html = read_fixture("no_results.html");

    assert_eq!(extract_html(&html).unwrap(), PageOutcome::Empty);

    let outcome = run_report(&january(), &config_in(&dir), |_| Ok(html)).unwrap();
    assert_eq!(outcome, ReportOutcome::NoRecords);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_submission_end_to_end() {
    let dir = TempDir::new().unwrap();
    let html = read_fixture("missing_submission.html");

    let records = extract_html(&html).unwrap().into_records().unwrap();
    assert_eq!(records[0].submitted_date, None);

    run_report(&january(), &config_in(&dir), |_| Ok(html)).unwrap();
    let report = std::fs::read_to_string(dir.path().join("2024-01-01_to_2024-01-10-report.md")).unwrap();
    assert!(report.contains("(https://arxiv.org/abs/2401.00010) |  | An Undated Preprint |"));
}

#[test]
fn test_missing_link_end_to_end() {
    let dir = TempDir::new().unwrap();
    let html = read_fixture("missing_link.html");

    let result = run_report(&january(), &config_in(&dir), |_| Ok(html));
    match result {
        Err(DigestError::MissingField { position, field }) => {
            assert_eq!(position, 2);
            assert_eq!(field, RecordField::Link);
        }
        other => panic!("expected MissingField, got {:?}", other),
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_search_results_fixture() {
    let records = extract_html(&read_fixture("search_results.html")).unwrap().into_records().unwrap();

    let ids: Vec<_> = records.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(ids, vec!["2401.01234", "2401.00777", "2401.00042"]);

    assert_eq!(records[0].tags, vec!["cs.AI", "cs.RO", "cs.LG"]);
    assert_eq!(records[0].submitted_date, Some(date!(2024 - 01 - 03)));
    assert_eq!(records[1].authors, vec!["Lucía Fernández"]);
    assert_eq!(records[1].submitted_date, Some(date!(2024 - 01 - 02)));
    assert!(records[2].tags.is_empty());
    assert_eq!(records[2].authors, vec!["Omar Haddad", "Omar Haddad"]);
    assert_eq!(records[2].submitted_date, None);
}

#[test]
fn test_table_reproduces_pipes() {
    let records = extract_html(&read_fixture("search_results.html")).unwrap().into_records().unwrap();
    let table = render_table(&records, &TableConfig::default());

    assert!(table.contains("| On the Limits of In-Context Learning | A Case Study |"));

    let escaped = render_table(&records, &TableConfig { escape_pipes: true });
    assert!(escaped.contains(r"| On the Limits of In-Context Learning \| A Case Study |"));
}

#[test]
fn test_render_twice_identical() {
    let records = extract_html(&read_fixture("search_results.html")).unwrap().into_records().unwrap();
    let config = TableConfig::default();
    assert_eq!(render_table(&records, &config), render_table(&records, &config));
}

#[test]
fn test_json_report_end_to_end() {
    let dir = TempDir::new().unwrap();
    let html = read_fixture("search_results.html");
    let config = PipelineConfig { format: ReportFormat::Json, ..config_in(&dir) };

    let outcome = run_report(&january(), &config, |_| Ok(html)).unwrap();
    let path = dir.path().join("2024-01-01_to_2024-01-10-report.json");
    assert_eq!(outcome, ReportOutcome::Written { path: path.clone(), records: 3 });

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["count"], 3);
    assert!(value["records"][2]["submitted_date"].is_null());
}

#[test]
fn test_document_api() {
    let doc = Document::parse(&read_fixture("search_results.html")).expect("should parse");
    assert_eq!(doc.title(), Some("Search | arXiv e-print repository".to_string()));

    let schema = ArxivSchema::new().unwrap();
    let entries = schema.entries(&doc);
    assert_eq!(entries.len(), 3);

    let locator = schema.locate(entries[1].clone());
    assert_eq!(locator.identifier().as_deref(), Some("2401.00777"));
}
