//! Excel roster backend using calamine.
//!
//! Reads the first worksheet only, as a 2-D cell grid with row 0 as the
//! header row. Handles both `.xlsx` and legacy `.xls` workbooks. Cells are
//! coerced to trimmed strings; numeric cells with integral values print
//! without a trailing `.0` so identity and plate numbers survive Excel's
//! float representation.

use crate::traits::{ImportBackend, ParsedTable};
use calamine::{Data, Range, Reader, Xls, Xlsx};
use std::io::Cursor;
use tasreeh_core::{ImportFormat, RawRow, Result, TasreehError};

/// Excel workbook backend (.xlsx and .xls via the stored format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpreadsheetBackend {
    format: ImportFormat,
}

impl SpreadsheetBackend {
    /// Backend for modern `.xlsx` workbooks.
    #[inline]
    #[must_use = "creates a backend instance that should be used for parsing"]
    pub const fn xlsx() -> Self {
        Self {
            format: ImportFormat::Xlsx,
        }
    }

    /// Backend for legacy `.xls` workbooks.
    #[inline]
    #[must_use = "creates a backend instance that should be used for parsing"]
    pub const fn xls() -> Self {
        Self {
            format: ImportFormat::Xls,
        }
    }

    /// First worksheet of the workbook, or `None` when the workbook has no
    /// sheets at all.
    fn first_sheet(&self, data: &[u8]) -> Result<Option<Range<Data>>> {
        let cursor = Cursor::new(data.to_vec());
        let range = match self.format {
            ImportFormat::Xls => {
                let mut workbook = Xls::new(cursor).map_err(|e| {
                    TasreehError::Parse(format!("Failed to parse Excel file: {e}"))
                })?;
                workbook
                    .worksheet_range_at(0)
                    .map(|r| r.map_err(|e| e.to_string()))
            }
            _ => {
                let mut workbook = Xlsx::new(cursor).map_err(|e| {
                    TasreehError::Parse(format!("Failed to parse Excel file: {e}"))
                })?;
                workbook
                    .worksheet_range_at(0)
                    .map(|r| r.map_err(|e| e.to_string()))
            }
        };
        match range {
            None => Ok(None),
            Some(Ok(range)) => Ok(Some(range)),
            Some(Err(e)) => Err(TasreehError::Parse(format!(
                "Failed to read worksheet: {e}"
            ))),
        }
    }
}

/// Coerce one cell to its trimmed string form.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            // 123456.0 prints as "123456": ID and plate numbers come back
            // from Excel as floats.
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{f:.0}")
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Walk a worksheet's cell grid into header/row structure.
///
/// Row 0 is the header row; rows where every cell coerces to the empty
/// string are elided.
fn table_from_range(range: &Range<Data>) -> ParsedTable {
    let mut grid = range.rows();
    let Some(header_row) = grid.next() else {
        return ParsedTable {
            headers: Vec::new(),
            rows: Vec::new(),
            errors: vec!["File is empty".to_string()],
        };
    };

    let headers: Vec<String> = header_row.iter().map(cell_text).collect();

    let mut rows = Vec::new();
    for cells in grid {
        let mut row = RawRow::new();
        let mut has_data = false;
        for (i, header) in headers.iter().enumerate() {
            let value = cells.get(i).map(cell_text).unwrap_or_default();
            if !value.is_empty() {
                has_data = true;
            }
            row.insert(header.clone(), value);
        }
        if has_data {
            rows.push(row);
        }
    }

    let errors = if rows.is_empty() {
        vec!["File is empty".to_string()]
    } else {
        Vec::new()
    };

    ParsedTable {
        headers,
        rows,
        errors,
    }
}

impl ImportBackend for SpreadsheetBackend {
    #[inline]
    fn format(&self) -> ImportFormat {
        self.format
    }

    fn parse_bytes(&self, data: &[u8]) -> Result<ParsedTable> {
        let Some(range) = self.first_sheet(data)? else {
            return Ok(ParsedTable {
                headers: Vec::new(),
                rows: Vec::new(),
                errors: vec!["File is empty".to_string()],
            });
        };

        let table = table_from_range(&range);
        log::info!(
            "Parsed {} {} rows ({} headers)",
            table.rows.len(),
            self.format,
            table.headers.len()
        );
        Ok(table)
    }
}
