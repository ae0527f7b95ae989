//! Page view-models: one tagged variant per printable page kind.
//!
//! Each variant carries only the projection of the application record its
//! page renders. Pages share no mutable state; the whole list is rebuilt
//! from scratch on every assembly and discarded after rendering.

use crate::record::{QrSummary, StaffMember, Vehicle, Weapon};
use crate::table::TableType;
use serde::{Deserialize, Serialize};

/// Letterhead strip shown at the top of every letter and table page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Letterhead {
    /// Image URL (data URL or path); a placeholder box renders when empty.
    pub header_image_url: String,
}

/// Signature block fields (name / position / signature line).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Signatory {
    /// Signing manager name.
    pub manager_name: String,
    /// Signing manager position.
    pub position: String,
}

/// Projection for the main application form page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MainFormPage {
    /// Letterhead strip.
    pub letterhead: Letterhead,
    /// Clearance type (English identifier).
    pub clearance_type: String,
    /// Entry approval type.
    pub entry_approval_type: String,
    /// Company name, English.
    pub company_name_english: String,
    /// Company name, Arabic.
    pub company_name_arabic: String,
    /// Contracting party, English.
    pub contracted_with_english: String,
    /// Contracting party, Arabic.
    pub contracted_with_arabic: String,
    /// Contract subject, English.
    pub contract_subject_english: String,
    /// Contract subject, Arabic.
    pub contract_subject_arabic: String,
    /// Contract starting date.
    pub starting_date: String,
    /// Contract end date.
    pub end_date: String,
    /// Duration in days, as entered.
    pub duration: String,
    /// Authorized person name, English.
    pub authorized_person_name: String,
    /// Authorized person name, Arabic.
    pub authorized_person_name_arabic: String,
    /// Focal point phone.
    pub fp_phone: String,
    /// Iraqi staff count, as entered.
    pub number_of_iraqis: String,
    /// International staff count, as entered.
    pub number_of_internationals: String,
    /// Vehicle count, as entered.
    pub number_of_vehicles: String,
    /// Purpose of entry, English.
    pub purpose_of_entry: String,
    /// Purpose of entry, Arabic.
    pub purpose_of_entry_arabic: String,
}

/// Projection for the security clearance request letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClearanceRequestPage {
    /// Letterhead strip.
    pub letterhead: Letterhead,
    /// Clearance type (English identifier).
    pub clearance_type: String,
    /// Clearance type Arabic label.
    pub clearance_type_arabic: String,
    /// Duration in days, as entered.
    pub duration: String,
    /// Company name, English.
    pub company_name_english: String,
    /// Company name, Arabic.
    pub company_name_arabic: String,
    /// Contract number.
    pub contract_number: String,
    /// Contracting party, English.
    pub contracted_with_english: String,
    /// Contracting party, Arabic.
    pub contracted_with_arabic: String,
    /// Iraqi staff count, as entered.
    pub number_of_iraqis: String,
    /// International staff count, as entered.
    pub number_of_internationals: String,
    /// Vehicle count, as entered.
    pub number_of_vehicles: String,
    /// Weapon count, as entered.
    pub number_of_weapons: String,
    /// Signature block.
    pub signatory: Signatory,
}

/// Projection for the authorization letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationLetterPage {
    /// Letterhead strip.
    pub letterhead: Letterhead,
    /// Company name, English.
    pub company_name_english: String,
    /// Company name, Arabic.
    pub company_name_arabic: String,
    /// Contract number.
    pub contract_number: String,
    /// Contracting party, English.
    pub contracted_with_english: String,
    /// Contracting party, Arabic.
    pub contracted_with_arabic: String,
    /// Authorized person name, English.
    pub authorized_person_name: String,
    /// Authorized person name, Arabic.
    pub authorized_person_name_arabic: String,
    /// Authorized person identity number.
    pub authorized_person_id: String,
    /// Authorization validity start date.
    pub authorization_start_date: String,
    /// Authorization validity end date.
    pub authorization_end_date: String,
    /// Contact information line.
    pub contact_info: String,
    /// Signature block.
    pub signatory: Signatory,
}

/// Projection for the pledge letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PledgeLetterPage {
    /// Letterhead strip.
    pub letterhead: Letterhead,
    /// Clearance type (English identifier).
    pub clearance_type: String,
    /// Company name, English.
    pub company_name_english: String,
    /// Company name, Arabic.
    pub company_name_arabic: String,
    /// Contract number.
    pub contract_number: String,
    /// Contracting party, English.
    pub contracted_with_english: String,
    /// Contracting party, Arabic.
    pub contracted_with_arabic: String,
    /// Iraqi staff count, as entered.
    pub number_of_iraqis: String,
    /// International staff count, as entered.
    pub number_of_internationals: String,
    /// Vehicle count, as entered.
    pub number_of_vehicles: String,
    /// Weapon count, as entered.
    pub number_of_weapons: String,
    /// Signature block.
    pub signatory: Signatory,
}

/// Projection for the long-term entry pledge letter (non-permanent
/// clearances only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LongTermPledgePage {
    /// Letterhead strip.
    pub letterhead: Letterhead,
    /// Company name, English.
    pub company_name_english: String,
    /// Company name, Arabic.
    pub company_name_arabic: String,
    /// Contract number.
    pub contract_number: String,
    /// Contracting party, English.
    pub contracted_with_english: String,
    /// Contracting party, Arabic.
    pub contracted_with_arabic: String,
    /// Signature block.
    pub signatory: Signatory,
}

/// Projection for the visa pledge letter (non-permanent clearances only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaPledgePage {
    /// Letterhead strip.
    pub letterhead: Letterhead,
    /// Company name, English.
    pub company_name_english: String,
    /// Company name, Arabic.
    pub company_name_arabic: String,
    /// Contract number.
    pub contract_number: String,
    /// Contracting party, English.
    pub contracted_with_english: String,
    /// Contracting party, Arabic.
    pub contracted_with_arabic: String,
    /// International staff count, as entered.
    pub number_of_internationals: String,
    /// Signature block.
    pub signatory: Signatory,
}

/// Typed rows carried by one roster table page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterRows {
    /// Staff rows (international or local; the page's table kind says
    /// which).
    Staff(Vec<StaffMember>),
    /// Vehicle rows.
    Vehicles(Vec<Vehicle>),
    /// Weapon rows.
    Weapons(Vec<Weapon>),
}

impl RosterRows {
    /// Number of populated rows on this page.
    #[must_use = "returns the populated row count"]
    pub fn len(&self) -> usize {
        match self {
            Self::Staff(rows) => rows.len(),
            Self::Vehicles(rows) => rows.len(),
            Self::Weapons(rows) => rows.len(),
        }
    }

    /// True when the page carries no populated rows.
    #[must_use = "reports whether the page has populated rows"]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One page of a roster table run.
///
/// Every page renders exactly `table.rows_per_page()` row slots; indices
/// beyond `rows.len()` render as blank cells. Serial numbers continue
/// across pages from `start_index + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterTablePage {
    /// Table kind this page belongs to.
    pub table: TableType,
    /// Zero-based page index within the kind's run.
    pub page_index: usize,
    /// Total pages in the kind's run (always >= 1).
    pub total_pages: usize,
    /// Global index of the first row slot on this page.
    pub start_index: usize,
    /// Populated rows for this page, in roster order.
    pub rows: RosterRows,
    /// Letterhead strip.
    pub letterhead: Letterhead,
    /// Signature block; rendered only when `is_last_page`.
    pub signatory: Signatory,
}

impl RosterTablePage {
    /// True for the final page of this kind's run; the signature block
    /// renders only there.
    #[inline]
    #[must_use = "reports whether this is the run's last page"]
    pub const fn is_last_page(&self) -> bool {
        self.page_index + 1 == self.total_pages
    }
}

/// Projection for the trailing QR summary page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QrSummaryPage {
    /// Allow-listed payload handed to the external QR encoder.
    pub summary: QrSummary,
}

/// One printable page of the assembled document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageViewModel {
    /// Main application form.
    MainForm(MainFormPage),
    /// Security clearance request letter.
    ClearanceRequest(ClearanceRequestPage),
    /// Authorization letter.
    AuthorizationLetter(AuthorizationLetterPage),
    /// Pledge letter.
    PledgeLetter(PledgeLetterPage),
    /// Long-term entry pledge letter.
    LongTermPledge(LongTermPledgePage),
    /// Visa pledge letter.
    VisaPledge(VisaPledgePage),
    /// One page of a roster table run.
    RosterTable(RosterTablePage),
    /// Trailing QR summary page.
    QrSummary(QrSummaryPage),
}

impl PageViewModel {
    /// Stable identifier for logging and tests.
    #[must_use = "returns the page kind identifier"]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MainForm(_) => "main_form",
            Self::ClearanceRequest(_) => "clearance_request",
            Self::AuthorizationLetter(_) => "authorization_letter",
            Self::PledgeLetter(_) => "pledge_letter",
            Self::LongTermPledge(_) => "long_term_pledge",
            Self::VisaPledge(_) => "visa_pledge",
            Self::RosterTable(_) => "roster_table",
            Self::QrSummary(_) => "qr_summary",
        }
    }
}
