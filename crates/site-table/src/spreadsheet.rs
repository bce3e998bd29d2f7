//! Spreadsheet Workbook Parsing

use crate::cell::CellValue;
use crate::error::LoadError;
use crate::table::Table;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Cursor;
use tracing::debug;

/// Parse the first worksheet of a workbook; the first row is the header
pub fn parse_spreadsheet(bytes: &[u8]) -> Result<Table, LoadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let sheet_names = workbook.sheet_names();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::EmptyWorkbook)??;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or(LoadError::MissingHeader)?
        .iter()
        .map(|cell| convert_cell(cell).to_string())
        .collect();
    let rows: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    if sheet_names.len() > 1 {
        debug!(
            "Workbook has {} sheets, reading only {:?}",
            sheet_names.len(),
            sheet_names.first()
        );
    }
    debug!(
        "Parsed spreadsheet with {} columns and {} rows",
        headers.len(),
        rows.len()
    );
    Ok(Table::new(headers, rows))
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Int(value) => CellValue::Integer(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) if value.is_duration() => CellValue::Float(value.as_f64()),
        Data::DateTime(value) => value
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Empty),
        Data::DateTimeIso(text) => parse_iso(text)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(text.clone())),
        Data::DurationIso(text) => CellValue::Text(text.clone()),
    }
}

fn parse_iso(text: &str) -> Option<NaiveDateTime> {
    text.parse::<NaiveDateTime>().ok().or_else(|| {
        text.parse::<NaiveDate>()
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_scalar_cells() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(convert_cell(&Data::Int(7)), CellValue::Integer(7));
        assert_eq!(convert_cell(&Data::Float(100.0)), CellValue::Float(100.0));
        assert_eq!(
            convert_cell(&Data::String("SIV Ready".into())),
            CellValue::Text("SIV Ready".into())
        );
    }

    #[test]
    fn test_convert_iso_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            convert_cell(&Data::DateTimeIso("2024-03-01".into())),
            CellValue::DateTime(expected)
        );
        assert_eq!(
            convert_cell(&Data::DateTimeIso("2024-03-01T00:00:00".into())),
            CellValue::DateTime(expected)
        );
    }

    #[test]
    fn test_rejects_non_workbook_bytes() {
        assert!(matches!(
            parse_spreadsheet(b"SITE NUMBER,SITE STATUS\n"),
            Err(LoadError::Spreadsheet(_))
        ));
    }
}
