//! CSV roster backend.
//!
//! Parses header-mode CSV with UTF-8 decoding. A leading byte-order mark is
//! stripped before parsing — templates ship with one so that Arabic text
//! survives Excel round-trips. Every header and cell is trimmed, and rows
//! where every cell is empty never reach the output.

use crate::traits::{ImportBackend, ParsedTable};
use tasreeh_core::{ImportFormat, RawRow, Result, TasreehError};

/// UTF-8 byte-order mark.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// CSV roster backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CsvBackend;

impl CsvBackend {
    /// Create a new CSV backend instance.
    #[inline]
    #[must_use = "creates a backend instance that should be used for parsing"]
    pub const fn new() -> Self {
        Self
    }
}

impl ImportBackend for CsvBackend {
    #[inline]
    fn format(&self) -> ImportFormat {
        ImportFormat::Csv
    }

    fn parse_bytes(&self, data: &[u8]) -> Result<ParsedTable> {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        let content = std::str::from_utf8(data)
            .map_err(|e| TasreehError::Parse(format!("CSV content must be valid UTF-8: {e}")))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| TasreehError::Parse(format!("Failed to read CSV header row: {e}")))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| TasreehError::Parse(format!("Failed to read CSV record: {e}")))?;

            let mut row = RawRow::new();
            let mut has_data = false;
            for (i, header) in headers.iter().enumerate() {
                let value = record.get(i).unwrap_or("").trim().to_string();
                if !value.is_empty() {
                    has_data = true;
                }
                row.insert(header.clone(), value);
            }
            // Blank rows are absent from the output by design.
            if has_data {
                rows.push(row);
            }
        }

        log::info!("Parsed {} CSV rows ({} headers)", rows.len(), headers.len());

        let errors = if rows.is_empty() {
            vec!["File is empty".to_string()]
        } else {
            Vec::new()
        };

        Ok(ParsedTable {
            headers,
            rows,
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> ParsedTable {
        CsvBackend::new().parse_bytes(content.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_basic_roster() {
        let table = parse("fullName,position,IDNumber,workLocation\nJane Doe,Engineer,P123456,Site A\n");
        assert_eq!(
            table.headers,
            vec!["fullName", "position", "IDNumber", "workLocation"]
        );
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0]["fullName"], "Jane Doe");
        assert_eq!(table.rows[0]["IDNumber"], "P123456");
        assert!(table.errors.is_empty());
    }

    #[test]
    fn test_bom_is_stripped() {
        let table = parse("\u{FEFF}weaponNumber,weaponType\nW-1,Rifle\n");
        assert_eq!(table.headers[0], "weaponNumber");
        assert_eq!(table.rows[0]["weaponNumber"], "W-1");
    }

    #[test]
    fn test_headers_and_cells_trimmed() {
        let table = parse(" vehicleNumber , vehicleColor \n 1234 A ,  White \n");
        assert_eq!(table.headers, vec!["vehicleNumber", "vehicleColor"]);
        assert_eq!(table.rows[0]["vehicleNumber"], "1234 A");
        assert_eq!(table.rows[0]["vehicleColor"], "White");
    }

    #[test]
    fn test_blank_rows_elided() {
        let table = parse("a,b\n1,2\n,\n  ,  \n3,4\n");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1]["a"], "3");
    }

    #[test]
    fn test_empty_file_is_successful_empty_result() {
        let table = parse("a,b\n");
        assert!(table.rows.is_empty());
        assert_eq!(table.errors, vec!["File is empty"]);
    }

    #[test]
    fn test_short_rows_pad_with_empty() {
        let table = parse("a,b,c\n1,2\n");
        assert_eq!(table.rows[0]["c"], "");
    }

    #[test]
    fn test_arabic_content_preserved() {
        let table = parse("fullName,workLocation\nعلي حسن,الحلفاية\n");
        assert_eq!(table.rows[0]["fullName"], "علي حسن");
        assert_eq!(table.rows[0]["workLocation"], "الحلفاية");
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let err = CsvBackend::new().parse_bytes(&[0x61, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, TasreehError::Parse(_)));
        assert!(err.to_string().contains("UTF-8"));
    }
}
