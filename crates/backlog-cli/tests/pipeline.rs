//! Integration tests for the export pipeline.

use std::fs;
use std::path::PathBuf;

use backlog_cli::pipeline::{ExportOptions, export_backlog, load_mapping};
use backlog_ingest::{read_csv_headers, read_csv_table};
use backlog_model::REPORT_COLUMNS;
use tempfile::TempDir;

const BACKLOG_CSV: &str = "\
IGDB ID,Game name,Game release date,Platform,Status,Completion,Playtime,Rating (Score),Tags,Date added,Last updated,Review
1068,Super Mario Bros. 3,1988-10-23,NES,Played,Completed,10,9,classic,2024-01-05,2024-02-01,great
7346,Breath of the Wild,2017-03-03,Switch,Playing,In progress,85,,open world,2024-01-06,2024-03-10,
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn exports_report_next_to_input() {
    let dir = TempDir::new().expect("tempdir");
    let input = write(&dir, "backlog.csv", BACKLOG_CSV);

    let result = export_backlog(&ExportOptions {
        input: input.clone(),
        output: None,
        mapping: None,
        dry_run: false,
    })
    .expect("export");

    let output = result.output.expect("output path");
    assert_eq!(output, dir.path().join("backlog-report.csv"));
    assert_eq!(read_csv_headers(&output).expect("headers"), REPORT_COLUMNS);
    assert_eq!(read_csv_table(&output).expect("report").height(), 2);
    assert_eq!(result.rows, 2);
    assert_eq!(result.dropped, vec!["Review"]);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let input = write(&dir, "backlog.csv", BACKLOG_CSV);

    let result = export_backlog(&ExportOptions {
        input,
        output: None,
        mapping: None,
        dry_run: true,
    })
    .expect("export");

    assert!(result.output.is_none());
    assert!(!dir.path().join("backlog-report.csv").exists());
}

#[test]
fn custom_mapping_file_is_applied() {
    let dir = TempDir::new().expect("tempdir");
    let input = write(&dir, "backlog.csv", BACKLOG_CSV);
    let mapping = write(
        &dir,
        "mapping.json",
        r#"{"source_names":["Game name","Status"],"target_names":["Name","Play Status"]}"#,
    );
    let output = dir.path().join("out").join("report.csv");

    export_backlog(&ExportOptions {
        input,
        output: Some(output.clone()),
        mapping: Some(mapping),
        dry_run: false,
    })
    .expect("export");

    assert_eq!(
        read_csv_headers(&output).expect("headers"),
        vec!["Name", "Play Status"]
    );
}

#[test]
fn missing_source_column_fails_without_output() {
    let dir = TempDir::new().expect("tempdir");
    let input = write(&dir, "backlog.csv", "IGDB ID,Game name\n1,Doom\n");

    let err = export_backlog(&ExportOptions {
        input,
        output: None,
        mapping: None,
        dry_run: false,
    })
    .expect_err("incomplete backlog");

    assert!(format!("{err:#}").contains("One or more source columns is missing."));
    assert!(!dir.path().join("backlog-report.csv").exists());
}

#[test]
fn malformed_mapping_file_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let mapping = write(
        &dir,
        "mapping.json",
        r#"{"source_names":["A","B"],"target_names":["X"]}"#,
    );

    let err = load_mapping(Some(&mapping)).expect_err("unequal lengths");

    assert!(format!("{err:#}").contains("2 source names but 1 target names"));
}
