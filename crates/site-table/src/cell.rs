//! Typed Cell Values

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single loosely-typed table cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Blank or null-token cell
    #[default]
    Empty,
    /// Free text, kept verbatim
    Text(String),
    /// Integer literal
    Integer(i64),
    /// Floating point literal
    Float(f64),
    /// Boolean literal
    Bool(bool),
    /// Native date from a spreadsheet cell
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Whether the cell holds no value
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrow the text of a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => write!(f, "{}", text),
            Self::Integer(value) => write!(f, "{}", value),
            // Integral floats print without a trailing ".0"
            Self::Float(value)
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 =>
            {
                write!(f, "{}", *value as i64)
            }
            Self::Float(value) => write!(f, "{}", value),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::DateTime(value) => write!(f, "{}", value),
        }
    }
}
