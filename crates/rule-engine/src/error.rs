//! Evaluation Error Types

use thiserror::Error;

/// Errors that abort an evaluation before any rule runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// One or more required columns are absent from the table
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
}
