//! Validation and normalization of parsed roster rows.
//!
//! Validation separates structural problems (a required column missing
//! from the whole file — blocking) from data-completeness problems (a
//! matched column with an empty cell — warning only). Normalization maps
//! fuzzy source headers onto the canonical columns and passes unclaimed
//! source columns through untouched.

use crate::matching::match_header;
use tasreeh_core::{NormalizedRow, RawRow, TableType, ValidationResult};

/// Headers of the parsed data set, taken from the first row.
///
/// All rows of one parse share the header set, so the first row is
/// authoritative.
fn available_headers(rows: &[RawRow]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// All canonical columns of a kind, required then optional, in schema
/// order.
fn schema_columns(table: TableType) -> impl Iterator<Item = &'static str> {
    table
        .required_columns()
        .iter()
        .chain(table.optional_columns())
        .copied()
}

/// Validate parsed rows against a table kind's schema.
///
/// `is_valid` is false iff the data set is empty or at least one required
/// canonical column has no matching source header anywhere in the file.
/// Rows with empty cells under a matched required column produce one
/// warning per row, never an error.
#[must_use = "returns the validation findings"]
pub fn validate(rows: &[RawRow], table: TableType) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if rows.is_empty() {
        errors.push("No data found in file".to_string());
        return ValidationResult::from_findings(errors, warnings);
    }

    let headers = available_headers(rows);

    let missing: Vec<&str> = table
        .required_columns()
        .iter()
        .filter(|col| match_header(&headers, col).is_none())
        .copied()
        .collect();
    if !missing.is_empty() {
        errors.push(format!("Missing required columns: {}", missing.join(", ")));
    }

    for (index, row) in rows.iter().enumerate() {
        let empty_required: Vec<&str> = table
            .required_columns()
            .iter()
            .filter(|col| {
                match_header(&headers, col)
                    .is_some_and(|header| row.get(header).map_or(true, String::is_empty))
            })
            .copied()
            .collect();
        if !empty_required.is_empty() {
            warnings.push(format!(
                "Row {}: Missing data for {}",
                index + 1,
                empty_required.join(", ")
            ));
        }
    }

    if !errors.is_empty() {
        log::warn!("{} validation failed: {}", table, errors.join("; "));
    }

    ValidationResult::from_findings(errors, warnings)
}

/// Normalize parsed rows to canonical column names.
///
/// For every row, each canonical column (required then optional, in schema
/// order) takes the value of its first matching source header, or an empty
/// string when nothing matches. Source columns not claimed by any
/// canonical column are copied through under their original header. Pure:
/// the input is untouched and output order equals input order.
#[must_use = "returns the normalized rows"]
pub fn normalize(rows: &[RawRow], table: TableType) -> Vec<NormalizedRow> {
    rows.iter()
        .map(|row| {
            let headers: Vec<String> = row.keys().cloned().collect();
            let mut normalized = NormalizedRow::new();

            for column in schema_columns(table) {
                let value = match_header(&headers, column)
                    .and_then(|header| row.get(header))
                    .cloned()
                    .unwrap_or_default();
                normalized.insert(column.to_string(), value);
            }

            // Lossless passthrough of operator-supplied extras. A header
            // that fuzzy-matches any canonical column is considered
            // claimed, even when another header won the match.
            for (header, value) in row {
                let claimed = schema_columns(table)
                    .any(|column| match_header(std::slice::from_ref(header), column).is_some());
                if !claimed {
                    normalized.insert(header.clone(), value.clone());
                }
            }

            normalized
        })
        .collect()
}
