//! Loading a real workbook: first sheet only, header row, native cell types.

use chrono::{NaiveDate, NaiveDateTime};
use site_table::{load_path, CellValue, SourceFormat};
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sites.xlsx")
}

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn test_detects_workbook() {
    let bytes = std::fs::read(fixture()).unwrap();
    assert_eq!(SourceFormat::detect("sites.xlsx", &bytes), SourceFormat::Spreadsheet);
    assert_eq!(SourceFormat::detect("upload", &bytes), SourceFormat::Spreadsheet);
}

#[test]
fn test_reads_first_sheet_with_header_row() {
    let table = load_path(fixture()).unwrap();

    assert_eq!(table.headers().len(), 10);
    assert_eq!(table.headers()[0], "SITE NUMBER");
    assert_eq!(table.headers()[9], "SITE STATUS EFFECTIVE DATE");
    // The second sheet holds site 999, which must not be read
    assert_eq!(table.len(), 3);
}

#[test]
fn test_native_cell_types() {
    let table = load_path(fixture()).unwrap();

    assert_eq!(table.cell(0, "SITE NUMBER"), Some(&CellValue::Float(100.0)));
    assert_eq!(
        table.cell(0, "SITE STATUS EFFECTIVE DATE"),
        Some(&CellValue::DateTime(midnight(2024, 3, 1)))
    );
    assert_eq!(
        table.cell(1, "SELECTED"),
        Some(&CellValue::DateTime(midnight(2024, 1, 1)))
    );
    assert_eq!(table.cell(1, "ACTIVATION COMPLETE"), Some(&CellValue::Empty));
    assert_eq!(
        table.cell(2, "SITE NUMBER"),
        Some(&CellValue::Text("US-017".into()))
    );
}
