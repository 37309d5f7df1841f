use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ao3_history::export::{CSV_HEADERS, ExportFormat, ExportOptions, export_csv, export_to_path};
use ao3_history::ingestion::{ImportOptions, import_from_path};

fn tmp_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("ao3-history-{name}-{nanos}.csv"))
}

#[test]
fn exported_csv_reads_back_with_the_csv_crate() {
    let works = import_from_path("tests/fixtures/history.json", &ImportOptions::default()).unwrap();
    let path = tmp_file("readback");
    export_to_path(&works, ExportFormat::Csv, &path, &ExportOptions::default()).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, CSV_HEADERS);

    let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "The Long Way Home");
    assert_eq!(&rows[0][3], "45210");
    assert_eq!(&rows[0][11], "88");
    assert_eq!(&rows[1][0], "Quiet, Like Snow");
    assert_eq!(&rows[1][2], "Star Wars, Good Omens (TV)");
    assert_eq!(&rows[1][11], "0");
    assert_eq!(&rows[2][0], "Deleted Work");
    assert_eq!(&rows[2][1], "Unknown");
    assert_eq!(&rows[2][14], "Unknown");

    std::fs::remove_file(path).ok();
}

#[test]
fn quoting_doubles_embedded_quotes() {
    let works = import_from_path("tests/fixtures/history.json", &ImportOptions::default()).unwrap();
    let mut out = Vec::new();
    export_csv(&works[1..2], &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with("\"Quiet, Like Snow\",frostbite,"));
}

#[test]
fn empty_export_is_header_only() {
    let mut out = Vec::new();
    export_csv(&[], &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.trim_end(), CSV_HEADERS.join(","));
}
