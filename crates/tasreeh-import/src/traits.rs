//! Core trait definitions for roster import backends.

use std::path::Path;
use tasreeh_core::{ImportFormat, RawRow, Result};

/// Outcome of the parse stage, before validation.
///
/// Zero data rows is a successful result carrying a descriptive note in
/// `errors`; only malformed input (bad encoding, corrupt workbook) fails
/// the parse itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// Trimmed source headers, in file order.
    pub headers: Vec<String>,
    /// One map per non-empty source row; completely blank rows are elided.
    pub rows: Vec<RawRow>,
    /// Non-fatal parse notes (e.g. "File is empty").
    pub errors: Vec<String>,
}

impl ParsedTable {
    /// Number of parsed data rows.
    #[inline]
    #[must_use = "returns the parsed row count"]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A parser for one roster file format.
pub trait ImportBackend {
    /// The format this backend parses.
    fn format(&self) -> ImportFormat;

    /// Parse raw file bytes into header/row structure.
    ///
    /// # Errors
    ///
    /// Returns [`TasreehError::Parse`](tasreeh_core::TasreehError::Parse)
    /// when the payload cannot be decoded or read as this format.
    fn parse_bytes(&self, data: &[u8]) -> Result<ParsedTable>;

    /// Read a file and parse its contents.
    ///
    /// # Errors
    ///
    /// Returns [`TasreehError::Io`](tasreeh_core::TasreehError::Io) when the
    /// file cannot be read, or any error of [`Self::parse_bytes`].
    fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ParsedTable> {
        let data = std::fs::read(path)?;
        self.parse_bytes(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_table_row_count() {
        let mut table = ParsedTable::default();
        assert_eq!(table.row_count(), 0);
        table.rows.push(RawRow::new());
        assert_eq!(table.row_count(), 1);
    }
}
