//! Error types for roster import and document assembly.
//!
//! Parse-level failures are typed and returned as `Err`; data-quality
//! problems (missing columns, empty cells) are reported through
//! [`ValidationResult`](crate::table::ValidationResult) instead and never
//! reach this enum.

use thiserror::Error;

/// Error types that can occur while importing rosters or serializing
/// documents.
///
/// # Examples
///
/// ```rust
/// use tasreeh_core::TasreehError;
///
/// let err = TasreehError::UnsupportedFormat("pdf".to_string());
/// assert_eq!(
///     err.to_string(),
///     "Unsupported file format: pdf (expected csv, xlsx or xls)"
/// );
/// ```
#[derive(Error, Debug)]
pub enum TasreehError {
    /// File extension is not one of the accepted roster formats.
    #[error("Unsupported file format: {0} (expected csv, xlsx or xls)")]
    UnsupportedFormat(String),

    /// File exceeds the import size cap. Checked before any parsing.
    #[error("File size must be less than {limit} bytes (got {size})")]
    FileTooLarge {
        /// Actual payload size in bytes.
        size: usize,
        /// Configured cap in bytes.
        limit: usize,
    },

    /// Decode or parse failure in the underlying CSV/spreadsheet reader.
    ///
    /// Carries the reader's own message so the user sees what was wrong
    /// with the file.
    #[error("Failed to parse file: {0}")]
    Parse(String),

    /// File I/O error reading an import or writing rendered output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for [`Result<T, TasreehError>`].
pub type Result<T> = std::result::Result<T, TasreehError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let error = TasreehError::UnsupportedFormat("docx".to_string());
        assert_eq!(
            error.to_string(),
            "Unsupported file format: docx (expected csv, xlsx or xls)"
        );
    }

    #[test]
    fn test_file_too_large_display() {
        let error = TasreehError::FileTooLarge {
            size: 11 * 1024 * 1024,
            limit: 10 * 1024 * 1024,
        };
        let display = error.to_string();
        assert!(display.contains("10485760"));
        assert!(display.contains("11534336"));
    }

    #[test]
    fn test_parse_error_carries_underlying_message() {
        let error = TasreehError::Parse("invalid zip archive".to_string());
        assert_eq!(error.to_string(), "Failed to parse file: invalid zip archive");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "roster.csv not found");
        let err: TasreehError = io_err.into();
        match err {
            TasreehError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: TasreehError = json_err.into();
        assert!(matches!(err, TasreehError::Json(_)));
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(TasreehError::Parse("bad header row".to_string()))
        }
        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }
        match outer() {
            Err(TasreehError::Parse(msg)) => assert_eq!(msg, "bad header row"),
            other => panic!("expected Parse to propagate, got {other:?}"),
        }
    }
}
