//! Input format detection for roster imports.

use serde::{Deserialize, Serialize};

/// Maximum accepted import payload size in bytes (10 MiB).
///
/// Enforced before any parsing; larger files are rejected with
/// [`TasreehError::FileTooLarge`](crate::error::TasreehError::FileTooLarge).
pub const MAX_IMPORT_BYTES: usize = 10 * 1024 * 1024;

/// Accepted roster import formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImportFormat {
    /// Comma-separated values (UTF-8, BOM tolerated)
    Csv,
    /// Excel workbook (.xlsx)
    Xlsx,
    /// Legacy Excel workbook (.xls)
    Xls,
}

impl ImportFormat {
    /// Detect format from a file extension (without the dot).
    ///
    /// Matching is case-insensitive. Returns `None` for anything outside
    /// the accepted set.
    #[inline]
    #[must_use = "detects format from file extension"]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            _ => None,
        }
    }

    /// Detect format from a file name by its final extension.
    #[must_use = "detects format from file name"]
    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = name.rsplit('.').next()?;
        // A bare name with no dot yields the whole name here; that only
        // matches if someone literally names a file "csv".
        if ext.len() == name.len() {
            return None;
        }
        Self::from_extension(ext)
    }

    /// File extensions associated with this format.
    #[inline]
    #[must_use = "returns file extensions for this format"]
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Csv => &["csv"],
            Self::Xlsx => &["xlsx"],
            Self::Xls => &["xls"],
        }
    }
}

impl std::fmt::Display for ImportFormat {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Csv => "CSV",
            Self::Xlsx => "XLSX",
            Self::Xls => "XLS",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_accepted() {
        assert_eq!(ImportFormat::from_extension("csv"), Some(ImportFormat::Csv));
        assert_eq!(ImportFormat::from_extension("xlsx"), Some(ImportFormat::Xlsx));
        assert_eq!(ImportFormat::from_extension("xls"), Some(ImportFormat::Xls));
    }

    #[test]
    fn test_from_extension_case_insensitive() {
        assert_eq!(ImportFormat::from_extension("CSV"), Some(ImportFormat::Csv));
        assert_eq!(ImportFormat::from_extension("Xlsx"), Some(ImportFormat::Xlsx));
    }

    #[test]
    fn test_from_extension_rejected() {
        assert_eq!(ImportFormat::from_extension("pdf"), None);
        assert_eq!(ImportFormat::from_extension("docx"), None);
        assert_eq!(ImportFormat::from_extension(""), None);
    }

    #[test]
    fn test_from_filename() {
        assert_eq!(
            ImportFormat::from_filename("staff roster.XLSX"),
            Some(ImportFormat::Xlsx)
        );
        assert_eq!(
            ImportFormat::from_filename("vehicles.final.csv"),
            Some(ImportFormat::Csv)
        );
        assert_eq!(ImportFormat::from_filename("weapons.pdf"), None);
        assert_eq!(ImportFormat::from_filename("no_extension"), None);
    }

    #[test]
    fn test_extensions_roundtrip() {
        for fmt in [ImportFormat::Csv, ImportFormat::Xlsx, ImportFormat::Xls] {
            for ext in fmt.extensions() {
                assert_eq!(ImportFormat::from_extension(ext), Some(fmt));
            }
        }
    }

    #[test]
    fn test_max_import_bytes() {
        assert_eq!(MAX_IMPORT_BYTES, 10 * 1024 * 1024);
    }
}
