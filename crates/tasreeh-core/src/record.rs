//! The application record: scalars entered in the form plus the four typed
//! rosters, and the merge rule that lets imported table data override any
//! statically-provided roster.
//!
//! Every field is a `String` as entered by the applicant; nothing here
//! validates completeness. Missing JSON fields deserialize to empty strings
//! so that a partially-filled record still assembles into a document.

use crate::table::{NormalizedRow, TableType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Clearance type driving conditional page inclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClearanceType {
    /// Permanent clearance: pledge-letter pages for temporary entry are
    /// omitted from the document.
    Permanent,
    /// Temporary clearance (the form default).
    #[default]
    Temporary,
    /// Urgent clearance.
    Urgent,
}

impl ClearanceType {
    /// English identifier as stored in the record.
    #[inline]
    #[must_use = "returns the English identifier"]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "Permanent",
            Self::Temporary => "Temporary",
            Self::Urgent => "Urgent",
        }
    }

    /// Arabic label used on the printed pages.
    #[inline]
    #[must_use = "returns the Arabic label"]
    pub const fn arabic(&self) -> &'static str {
        match self {
            Self::Permanent => "دائم",
            Self::Temporary => "مؤقت",
            Self::Urgent => "طارئ",
        }
    }
}

impl std::fmt::Display for ClearanceType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClearanceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Permanent" => Ok(Self::Permanent),
            "Temporary" => Ok(Self::Temporary),
            "Urgent" => Ok(Self::Urgent),
            other => Err(format!("Unknown clearance type: {other}")),
        }
    }
}

/// First non-empty value among `keys` in `row`, else empty string.
fn pick(row: &NormalizedRow, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| row.get(*k))
        .find(|v| !v.is_empty())
        .cloned()
        .unwrap_or_default()
}

/// One staff roster entry (international or local).
///
/// For international staff `id_number` holds a passport or ID number; for
/// local staff it is the national ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffMember {
    /// Full name as it should appear on the roster page.
    pub full_name: String,
    /// Job position.
    pub position: String,
    /// Identity document number.
    pub id_number: String,
    /// Assigned work location.
    pub work_location: String,
}

impl StaffMember {
    /// Map a normalized international-staff row onto the fixed shape.
    ///
    /// The identity number falls back from `IDNumber` to a legacy
    /// `passportNumber` column.
    #[must_use = "builds a staff member from a normalized row"]
    pub fn from_international_row(row: &NormalizedRow) -> Self {
        Self {
            full_name: pick(row, &["fullName"]),
            position: pick(row, &["position"]),
            id_number: pick(row, &["IDNumber", "passportNumber"]),
            work_location: pick(row, &["workLocation"]),
        }
    }

    /// Map a normalized local-staff row onto the fixed shape.
    ///
    /// The name falls back from a bare `name` column to `fullName`, and the
    /// work location from `workLocation` to a legacy `department` column.
    #[must_use = "builds a staff member from a normalized row"]
    pub fn from_local_row(row: &NormalizedRow) -> Self {
        Self {
            full_name: pick(row, &["name", "fullName"]),
            position: pick(row, &["position"]),
            id_number: pick(row, &["idNumber"]),
            work_location: pick(row, &["workLocation", "department"]),
        }
    }
}

/// One vehicle roster entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vehicle {
    /// Plate number / plate type.
    pub vehicle_number: String,
    /// Brand or model.
    pub vehicle_type: String,
    /// Color.
    pub vehicle_color: String,
    /// Assigned work location.
    pub work_location: String,
}

impl Vehicle {
    /// Map a normalized vehicles row onto the fixed shape.
    ///
    /// The type falls back from the canonical `vehicleBrand/Type` column to
    /// a plain `vehicleType` column.
    #[must_use = "builds a vehicle from a normalized row"]
    pub fn from_row(row: &NormalizedRow) -> Self {
        Self {
            vehicle_number: pick(row, &["vehicleNumber"]),
            vehicle_type: pick(row, &["vehicleBrand/Type", "vehicleType"]),
            vehicle_color: pick(row, &["vehicleColor"]),
            work_location: pick(row, &["workLocation"]),
        }
    }
}

/// One weapon roster entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Weapon {
    /// Serial number.
    pub weapon_number: String,
    /// Weapon type.
    pub weapon_type: String,
    /// Licence identifier.
    pub licence_id: String,
    /// Assigned work location.
    pub work_location: String,
}

impl Weapon {
    /// Map a normalized weapons row onto the fixed shape.
    ///
    /// Number falls back from `serialNumber` to `weaponNumber`, type from
    /// `type` to `weaponType`, and licence from `licenceId` to `model`.
    #[must_use = "builds a weapon from a normalized row"]
    pub fn from_row(row: &NormalizedRow) -> Self {
        Self {
            weapon_number: pick(row, &["serialNumber", "weaponNumber"]),
            weapon_type: pick(row, &["type", "weaponType"]),
            licence_id: pick(row, &["licenceId", "model"]),
            work_location: pick(row, &["workLocation"]),
        }
    }
}

/// Normalized import payloads per table kind, as produced by the import
/// pipeline. An empty vector means "no import for this kind".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableImports {
    /// Imported international staff rows.
    pub international_staff_data: Vec<NormalizedRow>,
    /// Imported local staff rows.
    pub local_staff_data: Vec<NormalizedRow>,
    /// Imported vehicle rows.
    pub vehicles_data: Vec<NormalizedRow>,
    /// Imported weapon rows.
    pub weapons_data: Vec<NormalizedRow>,
}

impl TableImports {
    /// Store an import under its table kind, replacing any previous rows
    /// for that kind.
    pub fn set(&mut self, table: TableType, rows: Vec<NormalizedRow>) {
        match table {
            TableType::InternationalStaff => self.international_staff_data = rows,
            TableType::LocalStaff => self.local_staff_data = rows,
            TableType::Vehicles => self.vehicles_data = rows,
            TableType::Weapons => self.weapons_data = rows,
        }
    }

    /// True when no kind has any imported rows.
    #[must_use = "reports whether any import is present"]
    pub fn is_empty(&self) -> bool {
        self.international_staff_data.is_empty()
            && self.local_staff_data.is_empty()
            && self.vehicles_data.is_empty()
            && self.weapons_data.is_empty()
    }
}

/// The complete security-clearance application.
///
/// Scalar fields are kept exactly as entered (counts included — they are
/// parsed to numbers only where a page needs a number). The four rosters
/// hold the typed rows the printed tables render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationRecord {
    /// Clearance type; drives conditional page inclusion.
    pub clearance_type: ClearanceType,
    /// Entry approval type (e.g. "New", "Renewal").
    pub entry_approval_type: String,

    /// Company name in English.
    pub company_name_english: String,
    /// Company name in Arabic.
    pub company_name_arabic: String,
    /// Contracting party in English.
    pub contracted_with_english: String,
    /// Contracting party in Arabic.
    pub contracted_with_arabic: String,

    /// Contract number.
    pub contract_number: String,
    /// Contract subject in English.
    pub contract_subject_english: String,
    /// Contract subject in Arabic.
    pub contract_subject_arabic: String,
    /// Contract starting date.
    pub starting_date: String,
    /// Contract end date.
    pub end_date: String,
    /// Requested clearance duration in days, as entered.
    pub duration: String,

    /// Number of Iraqi staff, as entered.
    pub number_of_iraqis: String,
    /// Number of international staff, as entered.
    pub number_of_internationals: String,
    /// Number of vehicles, as entered.
    pub number_of_vehicles: String,
    /// Number of weapons, as entered.
    pub number_of_weapons: String,

    /// Signing manager name.
    pub manager_name: String,
    /// Signing manager position.
    pub position: String,
    /// Focal point phone number.
    pub fp_phone: String,

    /// Purpose of entry in English (non-permanent clearances).
    pub purpose_of_entry: String,
    /// Purpose of entry in Arabic (non-permanent clearances).
    pub purpose_of_entry_arabic: String,

    /// Authorized person name in English.
    pub authorized_person_name: String,
    /// Authorized person name in Arabic.
    pub authorized_person_name_arabic: String,
    /// Authorized person identity number.
    pub authorized_person_id: String,
    /// Authorization validity start date.
    pub authorization_start_date: String,
    /// Authorization validity end date.
    pub authorization_end_date: String,
    /// Contact information line.
    pub contact_info: String,

    /// Letterhead image URL (data URL or path) for the printed pages.
    pub header_image_url: String,

    /// International staff roster.
    pub international_staff: Vec<StaffMember>,
    /// Local staff roster.
    pub local_staff: Vec<StaffMember>,
    /// Vehicles roster.
    pub vehicles: Vec<Vehicle>,
    /// Weapons roster.
    pub weapons: Vec<Weapon>,
}

impl ApplicationRecord {
    /// Merge imported table data into the record's rosters.
    ///
    /// A non-empty import for a kind always replaces the corresponding
    /// static roster, even when the static roster is itself non-empty.
    /// Empty imports leave the static roster untouched.
    pub fn apply_imports(&mut self, imports: &TableImports) {
        if !imports.international_staff_data.is_empty() {
            self.international_staff = imports
                .international_staff_data
                .iter()
                .map(StaffMember::from_international_row)
                .collect();
        }
        if !imports.local_staff_data.is_empty() {
            self.local_staff = imports
                .local_staff_data
                .iter()
                .map(StaffMember::from_local_row)
                .collect();
        }
        if !imports.vehicles_data.is_empty() {
            self.vehicles = imports.vehicles_data.iter().map(Vehicle::from_row).collect();
        }
        if !imports.weapons_data.is_empty() {
            self.weapons = imports.weapons_data.iter().map(Weapon::from_row).collect();
        }
    }

    /// Roster length for a table kind.
    #[must_use = "returns the roster length for the kind"]
    pub fn roster_len(&self, table: TableType) -> usize {
        match table {
            TableType::InternationalStaff => self.international_staff.len(),
            TableType::LocalStaff => self.local_staff.len(),
            TableType::Vehicles => self.vehicles.len(),
            TableType::Weapons => self.weapons.len(),
        }
    }
}

/// Condensed, allow-listed projection of an [`ApplicationRecord`] handed to
/// the external QR encoder.
///
/// Field order and wire names are stable; building the summary never fails.
/// Count strings that do not parse as numbers project as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QrSummary {
    /// Contract number.
    pub contract_number: String,
    /// Local staff count.
    pub local_staff_count: u32,
    /// International staff count.
    pub international_staff_count: u32,
    /// Vehicles count.
    pub vehicles_count: u32,
    /// Weapons count.
    pub weapons_count: u32,
    /// Clearance type (English identifier).
    pub clearance_type: String,
    /// Entry approval type.
    pub entry_approval_type: String,
}

impl QrSummary {
    /// Project a record onto the QR allow-list.
    #[must_use = "projects the record onto the QR allow-list"]
    pub fn from_record(record: &ApplicationRecord) -> Self {
        let count = |s: &str| s.trim().parse::<u32>().unwrap_or(0);
        Self {
            contract_number: record.contract_number.clone(),
            local_staff_count: count(&record.number_of_iraqis),
            international_staff_count: count(&record.number_of_internationals),
            vehicles_count: count(&record.number_of_vehicles),
            weapons_count: count(&record.number_of_weapons),
            clearance_type: record.clearance_type.as_str().to_string(),
            entry_approval_type: record.entry_approval_type.clone(),
        }
    }

    /// Serialize the summary to the JSON string the encoder consumes.
    ///
    /// # Errors
    ///
    /// Returns [`TasreehError::Json`](crate::error::TasreehError::Json) if
    /// serialization fails (it does not for this type in practice).
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
