//! The import pipeline front door.
//!
//! `TableImporter` gates payload size and extension, dispatches to the
//! format backend, then validates and normalizes. Parse failures are
//! returned as `Err` and block the import; validation findings travel as
//! data so the caller decides whether warnings block anything (they should
//! not — incomplete rosters may still be previewed).

use crate::csv::CsvBackend;
use crate::normalize::{normalize, validate};
use crate::traits::ImportBackend;
use crate::xlsx::SpreadsheetBackend;
use std::path::Path;
use tasreeh_core::{
    ImportFormat, NormalizedRow, Result, TableType, TasreehError, ValidationResult,
    MAX_IMPORT_BYTES,
};

/// Options for the import pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportOptions {
    /// Maximum accepted payload size in bytes.
    pub max_file_size: usize,
}

impl Default for ImportOptions {
    #[inline]
    fn default() -> Self {
        Self {
            max_file_size: MAX_IMPORT_BYTES,
        }
    }
}

/// Outcome of a completed import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    /// The table kind the import was declared against.
    pub table: TableType,
    /// Normalized rows, in source order. Empty when validation failed
    /// structurally — the caller must check `validation.is_valid` before
    /// merging.
    pub rows: Vec<NormalizedRow>,
    /// Number of normalized rows.
    pub row_count: usize,
    /// Schema validation findings. Warnings do not block; errors mean
    /// `rows` was not produced.
    pub validation: ValidationResult,
    /// Non-fatal parse notes from the backend.
    pub parse_errors: Vec<String>,
}

/// Dispatching importer over the format backends.
///
/// # Examples
///
/// ```rust
/// use tasreeh_core::TableType;
/// use tasreeh_import::TableImporter;
///
/// let csv = "fullName,position,IDNumber,workLocation\nJane Doe,Engineer,P123456,Site A\n";
/// let result = TableImporter::new()
///     .import_bytes(csv.as_bytes(), "staff.csv", TableType::InternationalStaff)?;
/// assert!(result.validation.is_valid);
/// assert_eq!(result.row_count, 1);
/// # Ok::<(), tasreeh_core::TasreehError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TableImporter {
    options: ImportOptions,
}

impl TableImporter {
    /// Create an importer with default options.
    #[inline]
    #[must_use = "creates an importer that should be used"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer with custom options.
    #[inline]
    #[must_use = "creates an importer that should be used"]
    pub const fn with_options(options: ImportOptions) -> Self {
        Self { options }
    }

    /// Run the full pipeline over an in-memory payload.
    ///
    /// Size and extension gates run before any parsing. Structural
    /// validation failure is NOT an `Err`: the result carries the findings
    /// with `validation.is_valid == false` and no rows.
    ///
    /// # Errors
    ///
    /// [`TasreehError::FileTooLarge`] over the size cap,
    /// [`TasreehError::UnsupportedFormat`] for unknown extensions,
    /// [`TasreehError::Parse`] when the backend cannot decode the payload.
    pub fn import_bytes(
        &self,
        data: &[u8],
        filename: &str,
        table: TableType,
    ) -> Result<ImportResult> {
        if data.len() > self.options.max_file_size {
            return Err(TasreehError::FileTooLarge {
                size: data.len(),
                limit: self.options.max_file_size,
            });
        }

        let format = ImportFormat::from_filename(filename)
            .ok_or_else(|| TasreehError::UnsupportedFormat(filename.to_string()))?;

        let parsed = match format {
            ImportFormat::Csv => CsvBackend::new().parse_bytes(data)?,
            ImportFormat::Xlsx => SpreadsheetBackend::xlsx().parse_bytes(data)?,
            ImportFormat::Xls => SpreadsheetBackend::xls().parse_bytes(data)?,
        };

        let validation = validate(&parsed.rows, table);
        let rows = if validation.is_valid {
            normalize(&parsed.rows, table)
        } else {
            Vec::new()
        };

        log::info!(
            "Imported {} as {}: {} rows, {} warnings, valid={}",
            filename,
            table,
            rows.len(),
            validation.warnings.len(),
            validation.is_valid
        );

        Ok(ImportResult {
            table,
            row_count: rows.len(),
            rows,
            validation,
            parse_errors: parsed.errors,
        })
    }

    /// Read a file and run the pipeline over its contents.
    ///
    /// This is the pipeline's single I/O point.
    ///
    /// # Errors
    ///
    /// [`TasreehError::Io`] when the file cannot be read, plus every error
    /// of [`Self::import_bytes`].
    pub fn import_file<P: AsRef<Path>>(&self, path: P, table: TableType) -> Result<ImportResult> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let data = std::fs::read(path)?;
        self.import_bytes(&data, &filename, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAFF_CSV: &str =
        "fullName,position,IDNumber,workLocation\nJane Doe,Engineer,P123456,Site A\n";

    #[test]
    fn test_import_valid_csv() {
        let result = TableImporter::new()
            .import_bytes(STAFF_CSV.as_bytes(), "staff.csv", TableType::InternationalStaff)
            .unwrap();
        assert!(result.validation.is_valid);
        assert!(result.validation.warnings.is_empty());
        assert_eq!(result.row_count, 1);
        assert_eq!(result.rows[0]["fullName"], "Jane Doe");
        assert_eq!(result.rows[0]["IDNumber"], "P123456");
    }

    #[test]
    fn test_oversized_payload_rejected_before_parsing() {
        let importer = TableImporter::with_options(ImportOptions { max_file_size: 16 });
        let err = importer
            .import_bytes(
                b"fullName,position,IDNumber,workLocation\n",
                "staff.csv",
                TableType::InternationalStaff,
            )
            .unwrap_err();
        assert!(matches!(err, TasreehError::FileTooLarge { limit: 16, .. }));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = TableImporter::new()
            .import_bytes(STAFF_CSV.as_bytes(), "staff.pdf", TableType::InternationalStaff)
            .unwrap_err();
        assert!(matches!(err, TasreehError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_structural_failure_returns_findings_not_err() {
        let csv = "weaponNumber,weaponType,workLocation\nW-1,Rifle,Site A\n";
        let result = TableImporter::new()
            .import_bytes(csv.as_bytes(), "weapons.csv", TableType::Weapons)
            .unwrap();
        assert!(!result.validation.is_valid);
        assert_eq!(
            result.validation.errors,
            vec!["Missing required columns: licenceId"]
        );
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_empty_file_reports_no_data() {
        let result = TableImporter::new()
            .import_bytes(b"fullName,position,idNumber,workLocation\n", "s.csv", TableType::LocalStaff)
            .unwrap();
        assert!(!result.validation.is_valid);
        assert_eq!(result.validation.errors, vec!["No data found in file"]);
        assert_eq!(result.parse_errors, vec!["File is empty"]);
    }

    #[test]
    fn test_warnings_do_not_block_import() {
        let csv = "fullName,position,IDNumber,workLocation\nJane Doe,,P123456,Site A\n";
        let result = TableImporter::new()
            .import_bytes(csv.as_bytes(), "staff.csv", TableType::InternationalStaff)
            .unwrap();
        assert!(result.validation.is_valid);
        assert_eq!(
            result.validation.warnings,
            vec!["Row 1: Missing data for position"]
        );
        assert_eq!(result.row_count, 1);
    }

    #[test]
    fn test_import_file_io_error() {
        let err = TableImporter::new()
            .import_file("/nonexistent/rosters/staff.csv", TableType::LocalStaff)
            .unwrap_err();
        assert!(matches!(err, TasreehError::Io(_)));
    }
}
