//! CSV template generation.
//!
//! Each table kind ships a header-only CSV template carrying its required
//! canonical columns. The file starts with a UTF-8 byte-order mark so
//! Excel opens Arabic content correctly when operators fill it in.

use tasreeh_core::TableType;

/// UTF-8 byte-order mark, as a string prefix.
const UTF8_BOM: &str = "\u{FEFF}";

/// Build the template CSV content for a table kind.
///
/// One header row with the required canonical column names, BOM-prefixed,
/// newline-terminated.
///
/// # Examples
///
/// ```rust
/// use tasreeh_core::TableType;
/// use tasreeh_import::template_csv;
///
/// let csv = template_csv(TableType::Weapons);
/// assert_eq!(csv, "\u{FEFF}weaponNumber,weaponType,licenceId,workLocation\n");
/// ```
#[must_use = "returns the template CSV content"]
pub fn template_csv(table: TableType) -> String {
    format!("{UTF8_BOM}{}\n", table.required_columns().join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_starts_with_bom() {
        for kind in TableType::ALL {
            let csv = template_csv(kind);
            assert!(csv.starts_with('\u{FEFF}'), "{kind} template missing BOM");
            assert!(csv.ends_with('\n'));
        }
    }

    #[test]
    fn test_template_lists_required_columns() {
        assert_eq!(
            template_csv(TableType::Vehicles),
            "\u{FEFF}vehicleNumber,vehicleBrand/Type,vehicleColor,workLocation\n"
        );
        assert_eq!(
            template_csv(TableType::LocalStaff),
            "\u{FEFF}fullName,position,idNumber,workLocation\n"
        );
    }

    #[test]
    fn test_template_filename_pairs_with_content() {
        assert_eq!(
            TableType::InternationalStaff.template_filename(),
            "international_staff-template.csv"
        );
    }

    #[test]
    fn test_template_roundtrips_through_csv_backend() {
        use crate::csv::CsvBackend;
        use crate::traits::ImportBackend;

        let content = format!("{}Jane,Engineer,P1,Site A\n", template_csv(TableType::InternationalStaff));
        let parsed = CsvBackend::new().parse_bytes(content.as_bytes()).unwrap();
        assert_eq!(
            parsed.headers,
            vec!["fullName", "position", "IDNumber", "workLocation"]
        );
        assert_eq!(parsed.rows[0]["fullName"], "Jane");
    }
}
