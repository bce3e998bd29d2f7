//! Container Format Detection

use serde::{Deserialize, Serialize};
use std::fmt;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE2_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

/// Supported upload container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    /// Comma-separated text
    Csv,
    /// Excel or OpenDocument workbook
    Spreadsheet,
}

impl SourceFormat {
    /// Detect the format from the file extension, falling back to magic bytes
    pub fn detect(file_name: &str, bytes: &[u8]) -> Self {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") | Some("txt") => Self::Csv,
            Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
                Self::Spreadsheet
            }
            _ if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE2_MAGIC) => {
                Self::Spreadsheet
            }
            _ => Self::Csv,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(SourceFormat::detect("sites.csv", b""), SourceFormat::Csv);
        assert_eq!(SourceFormat::detect("Sites.XLSX", b""), SourceFormat::Spreadsheet);
        assert_eq!(SourceFormat::detect("sites.xls", b""), SourceFormat::Spreadsheet);
    }

    #[test]
    fn test_detect_by_magic_bytes() {
        assert_eq!(
            SourceFormat::detect("upload", b"PK\x03\x04rest"),
            SourceFormat::Spreadsheet
        );
        assert_eq!(
            SourceFormat::detect("upload.bin", &[0xD0, 0xCF, 0x11, 0xE0, 0xA1]),
            SourceFormat::Spreadsheet
        );
        assert_eq!(SourceFormat::detect("upload", b"SITE NUMBER,"), SourceFormat::Csv);
    }

    #[test]
    fn test_extension_wins_over_content() {
        assert_eq!(SourceFormat::detect("sites.csv", b"PK\x03\x04"), SourceFormat::Csv);
    }
}
