//! Load Error Types

use thiserror::Error;

/// Errors that abort loading before any rule is evaluated
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed comma-separated input
    #[error("Invalid CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed or unsupported workbook
    #[error("Invalid spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Workbook has no worksheets
    #[error("Spreadsheet contains no worksheets")]
    EmptyWorkbook,

    /// Input has no header row
    #[error("Input has no header row")]
    MissingHeader,
}
