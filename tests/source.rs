// tests/source.rs
//
// The bundled sample tables must all be present and parseable.
//
use std::path::PathBuf;

use coach_scout::records::parse_table;
use coach_scout::source::{DataSource, Table};

fn sample_dir() -> DataSource {
    DataSource::Dir(PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")))
}

#[test]
fn every_table_fetches_and_parses() {
    let source = sample_dir();
    for table in Table::ALL {
        let text = source.fetch(table).expect(table.file_name());
        let records = parse_table(&text);
        assert!(!records.is_empty(), "{} has no data rows", table.file_name());
    }
}

#[test]
fn missing_file_names_the_path() {
    let source = DataSource::Dir(PathBuf::from("/nonexistent"));
    let err = source.fetch(Table::Plans).unwrap_err().to_string();
    assert!(err.contains("plans.csv"), "unexpected error: {err}");
}
