//! Lenient Date Coercion
//!
//! Cells that cannot be read as a date become `None` and never compare
//! before or after anything.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use site_table::CellValue;

/// Four-digit `%Y` fields also accept short years; reject those so two-digit
/// forms fall through to `%y`.
const MIN_YEAR: i32 = 1000;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%d-%b-%Y",
    "%d-%b-%y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Coerce a cell to a date-time, treating anything unreadable as absent
pub fn parse_date(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::DateTime(value) => Some(*value),
        CellValue::Text(text) => parse_date_text(text),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .filter_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .find(|value| value.year() >= MIN_YEAR)
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .filter_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .find(|date| date.year() >= MIN_YEAR)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
