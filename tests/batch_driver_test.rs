//! Tests for batch-level error isolation: a bad file never aborts the run

use std::fs;

use factors_importer::parser::workbook::build_database;

#[test]
fn test_empty_input_directory_yields_empty_database() {
    let dir = tempfile::tempdir().unwrap();

    let database = build_database(dir.path()).unwrap();
    assert_eq!(database.total_factors, 0);
    assert_eq!(database.total_documents, 0);
    assert!(database.years_covered.is_empty());
}

#[test]
fn test_missing_input_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    assert!(build_database(&missing).is_err());
}

#[test]
fn test_unreadable_workbook_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("factors-2020.xlsx"), b"not a real workbook").unwrap();

    let database = build_database(dir.path()).unwrap();
    assert_eq!(database.total_factors, 0);
    assert_eq!(database.total_documents, 0);
}

#[test]
fn test_files_without_a_year_or_spreadsheet_extension_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("factors.xlsx"), b"junk").unwrap();
    fs::write(dir.path().join("notes-2020.txt"), b"junk").unwrap();

    let database = build_database(dir.path()).unwrap();
    assert_eq!(database.total_documents, 0);
}
