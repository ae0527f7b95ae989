//! Table kinds, row maps and validation results for roster imports.
//!
//! A roster import is declared against one [`TableType`]. Each kind carries
//! a fixed, ordered set of canonical column names; these are never inferred
//! from the data. Rows travel as ordered string maps so that passthrough
//! columns keep their source order all the way to serialization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A raw parsed row: trimmed source header -> trimmed cell value.
///
/// Produced by the parse stage, one per non-empty source row. Header order
/// is the source file's column order.
pub type RawRow = IndexMap<String, String>;

/// A normalized row: canonical column -> value, in schema order, followed by
/// any unclaimed source columns under their original header.
///
/// Every required canonical column of the declaring [`TableType`] is always
/// present as a key (empty string when unmatched in the source).
pub type NormalizedRow = IndexMap<String, String>;

/// The four roster table kinds accepted by the import pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    /// Weapons roster
    Weapons,
    /// Vehicles roster
    Vehicles,
    /// International staff roster
    InternationalStaff,
    /// Local (Iraqi) staff roster
    LocalStaff,
}

impl TableType {
    /// All table kinds, in document order.
    pub const ALL: [Self; 4] = [
        Self::InternationalStaff,
        Self::LocalStaff,
        Self::Vehicles,
        Self::Weapons,
    ];

    /// Canonical required column names for this kind, in schema order.
    ///
    /// These match the distributed import templates; header variants are
    /// tolerated at match time, but the canonical names are fixed.
    #[inline]
    #[must_use = "returns the required canonical columns"]
    pub const fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Self::Weapons => &["weaponNumber", "weaponType", "licenceId", "workLocation"],
            Self::Vehicles => &[
                "vehicleNumber",
                "vehicleBrand/Type",
                "vehicleColor",
                "workLocation",
            ],
            Self::InternationalStaff => &["fullName", "position", "IDNumber", "workLocation"],
            Self::LocalStaff => &["fullName", "position", "idNumber", "workLocation"],
        }
    }

    /// Canonical optional column names for this kind.
    ///
    /// Empty for every kind today; kept so schema growth does not change
    /// the pipeline's shape.
    #[inline]
    #[must_use = "returns the optional canonical columns"]
    pub const fn optional_columns(&self) -> &'static [&'static str] {
        &[]
    }

    /// Stable identifier used in file names, CLI arguments and serialized
    /// payloads.
    #[inline]
    #[must_use = "returns the stable identifier for this kind"]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weapons => "weapons",
            Self::Vehicles => "vehicles",
            Self::InternationalStaff => "international_staff",
            Self::LocalStaff => "local_staff",
        }
    }

    /// Rows printed per physical page for this kind.
    ///
    /// Staff rows render narrower and fit 25 to a page; vehicle and weapon
    /// rows carry wider cells and fit 20.
    #[inline]
    #[must_use = "returns the page row capacity for this kind"]
    pub const fn rows_per_page(&self) -> usize {
        match self {
            Self::InternationalStaff | Self::LocalStaff => 25,
            Self::Vehicles | Self::Weapons => 20,
        }
    }

    /// File name for this kind's downloadable CSV template.
    #[inline]
    #[must_use = "returns the template file name"]
    pub fn template_filename(&self) -> String {
        format!("{}-template.csv", self.as_str())
    }
}

impl std::fmt::Display for TableType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TableType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "weapons" => Ok(Self::Weapons),
            "vehicles" => Ok(Self::Vehicles),
            "international_staff" => Ok(Self::InternationalStaff),
            "local_staff" => Ok(Self::LocalStaff),
            other => Err(format!("Unknown table type: {other}")),
        }
    }
}

/// Outcome of validating parsed rows against a table schema.
///
/// Structural problems (no rows at all, a required column missing from the
/// whole file) are errors and block the import. Per-row empty cells under a
/// matched column are warnings only; the caller may proceed with incomplete
/// data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// False iff `errors` is non-empty.
    pub is_valid: bool,
    /// Blocking schema problems, human-readable.
    pub errors: Vec<String>,
    /// Non-blocking row-completeness notes, human-readable.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no findings.
    #[inline]
    #[must_use = "creates an empty passing result"]
    pub const fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Build a result from collected findings; `is_valid` is derived.
    #[inline]
    #[must_use = "derives validity from the collected findings"]
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

impl Default for ValidationResult {
    #[inline]
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_columns_fixed_per_kind() {
        assert_eq!(
            TableType::Weapons.required_columns(),
            &["weaponNumber", "weaponType", "licenceId", "workLocation"]
        );
        assert_eq!(
            TableType::Vehicles.required_columns(),
            &["vehicleNumber", "vehicleBrand/Type", "vehicleColor", "workLocation"]
        );
        assert_eq!(
            TableType::InternationalStaff.required_columns(),
            &["fullName", "position", "IDNumber", "workLocation"]
        );
        assert_eq!(
            TableType::LocalStaff.required_columns(),
            &["fullName", "position", "idNumber", "workLocation"]
        );
    }

    #[test]
    fn test_optional_columns_empty_today() {
        for kind in TableType::ALL {
            assert!(kind.optional_columns().is_empty());
        }
    }

    #[test]
    fn test_rows_per_page() {
        assert_eq!(TableType::InternationalStaff.rows_per_page(), 25);
        assert_eq!(TableType::LocalStaff.rows_per_page(), 25);
        assert_eq!(TableType::Vehicles.rows_per_page(), 20);
        assert_eq!(TableType::Weapons.rows_per_page(), 20);
    }

    #[test]
    fn test_as_str_from_str_roundtrip() {
        for kind in TableType::ALL {
            assert_eq!(kind.as_str().parse::<TableType>(), Ok(kind));
        }
        assert!("armory".parse::<TableType>().is_err());
    }

    #[test]
    fn test_template_filename() {
        assert_eq!(
            TableType::LocalStaff.template_filename(),
            "local_staff-template.csv"
        );
        assert_eq!(TableType::Weapons.template_filename(), "weapons-template.csv");
    }

    #[test]
    fn test_validation_result_derives_validity() {
        let passing = ValidationResult::from_findings(vec![], vec!["Row 1: note".into()]);
        assert!(passing.is_valid);
        let failing = ValidationResult::from_findings(vec!["Missing".into()], vec![]);
        assert!(!failing.is_valid);
    }

    #[test]
    fn test_serde_table_type_snake_case() {
        let json = serde_json::to_string(&TableType::InternationalStaff).unwrap();
        assert_eq!(json, "\"international_staff\"");
        let back: TableType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TableType::InternationalStaff);
    }
}
