//! Comma-Separated Text Parsing
//!
//! Types are inferred per column: a column is numeric or boolean only when
//! every non-null field in it parses that way, otherwise all of its fields
//! stay verbatim text.

use crate::cell::CellValue;
use crate::error::LoadError;
use crate::table::Table;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Tokens read as null, matching common spreadsheet export conventions
const NULL_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "#N/A",
    "#N/A N/A", "#NA", "<NA>", "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];

/// Inferred type of a whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Bool,
    Text,
}

/// Parse comma-separated bytes into a table; the first record is the header
pub fn parse_csv(bytes: &[u8]) -> Result<Table, LoadError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Err(LoadError::MissingHeader),
    };

    let mut raw_rows = Vec::new();
    for record in records {
        raw_rows.push(record?);
    }

    let width = raw_rows
        .iter()
        .map(|record| record.len())
        .max()
        .unwrap_or(0)
        .max(headers.len());
    let kinds: Vec<ColumnKind> = (0..width)
        .map(|index| column_kind(raw_rows.iter().filter_map(|record| record.get(index))))
        .collect();

    let rows: Vec<Vec<CellValue>> = raw_rows
        .iter()
        .map(|record| {
            record
                .iter()
                .zip(&kinds)
                .map(|(raw, kind)| typed_cell(raw, *kind))
                .collect()
        })
        .collect();

    debug!(
        "Parsed CSV with {} columns and {} rows",
        headers.len(),
        rows.len()
    );
    Ok(Table::new(headers, rows))
}

fn is_null(raw: &str) -> bool {
    NULL_TOKENS.contains(&raw)
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn field_kind(raw: &str) -> ColumnKind {
    if raw.parse::<i64>().is_ok() {
        ColumnKind::Integer
    } else if raw.parse::<f64>().is_ok() {
        ColumnKind::Float
    } else if parse_bool(raw).is_some() {
        ColumnKind::Bool
    } else {
        ColumnKind::Text
    }
}

/// Narrowest kind that fits every non-null field; all-null columns are text
fn column_kind<'a>(fields: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut kind = None;
    for raw in fields.filter(|raw| !is_null(raw)) {
        kind = Some(match (kind, field_kind(raw)) {
            (_, ColumnKind::Text) => return ColumnKind::Text,
            (None, next) => next,
            (Some(current), next) if current == next => current,
            (Some(ColumnKind::Integer), ColumnKind::Float)
            | (Some(ColumnKind::Float), ColumnKind::Integer) => ColumnKind::Float,
            _ => return ColumnKind::Text,
        });
    }
    kind.unwrap_or(ColumnKind::Text)
}

fn typed_cell(raw: &str, kind: ColumnKind) -> CellValue {
    if is_null(raw) {
        return CellValue::Empty;
    }
    let typed = match kind {
        ColumnKind::Integer => raw.parse().ok().map(CellValue::Integer),
        ColumnKind::Float => raw.parse().ok().map(CellValue::Float),
        ColumnKind::Bool => parse_bool(raw).map(CellValue::Bool),
        ColumnKind::Text => None,
    };
    typed.unwrap_or_else(|| CellValue::Text(raw.to_string()))
}
