//! Site Tracking Table Loader
//!
//! Parses uploaded site tracking exports (comma-separated text or a
//! spreadsheet workbook) into an immutable table of typed cells.

mod cell;
mod csv_source;
mod error;
mod format;
mod spreadsheet;
mod table;

pub use cell::CellValue;
pub use csv_source::parse_csv;
pub use error::LoadError;
pub use format::SourceFormat;
pub use spreadsheet::parse_spreadsheet;
pub use table::{Column, Table};

use std::path::Path;
use tracing::info;

/// Read a file from disk and parse it according to its detected format
pub fn load_path(path: impl AsRef<Path>) -> Result<Table, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    load_bytes(&file_name, &bytes)
}

/// Parse an in-memory upload, using the file name as a format hint
pub fn load_bytes(file_name: &str, bytes: &[u8]) -> Result<Table, LoadError> {
    let format = SourceFormat::detect(file_name, bytes);
    info!("Loading {} ({} bytes) as {}", file_name, bytes.len(), format);

    let table = match format {
        SourceFormat::Csv => parse_csv(bytes)?,
        SourceFormat::Spreadsheet => parse_spreadsheet(bytes)?,
    };

    info!(
        "Loaded {} rows across {} columns",
        table.len(),
        table.headers().len()
    );
    Ok(table)
}
