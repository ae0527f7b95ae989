//! Document assembly: one application record in, the ordered page list out.
//!
//! Assembly is total. Missing or empty fields render as empty strings and
//! optional data silently omits its pages; strict validation belongs to the
//! form layer, not here.

use crate::page::{
    AuthorizationLetterPage, ClearanceRequestPage, Letterhead, LongTermPledgePage, MainFormPage,
    PageViewModel, PledgeLetterPage, QrSummaryPage, RosterRows, RosterTablePage, Signatory,
    VisaPledgePage,
};
use crate::record::{ApplicationRecord, ClearanceType, QrSummary};
use crate::table::TableType;

/// Total pages needed for a roster of `len` rows at `rows_per_page`.
///
/// Always at least 1: a run that exists renders one page of blank rows even
/// when the roster is empty.
#[inline]
#[must_use = "computes the page count for a roster"]
pub const fn total_pages(len: usize, rows_per_page: usize) -> usize {
    let len = if len == 0 { 1 } else { len };
    len.div_ceil(rows_per_page)
}

fn letterhead(record: &ApplicationRecord) -> Letterhead {
    Letterhead {
        header_image_url: record.header_image_url.clone(),
    }
}

fn signatory(record: &ApplicationRecord) -> Signatory {
    Signatory {
        manager_name: record.manager_name.clone(),
        position: record.position.clone(),
    }
}

fn main_form(record: &ApplicationRecord) -> MainFormPage {
    MainFormPage {
        letterhead: letterhead(record),
        clearance_type: record.clearance_type.as_str().to_string(),
        entry_approval_type: record.entry_approval_type.clone(),
        company_name_english: record.company_name_english.clone(),
        company_name_arabic: record.company_name_arabic.clone(),
        contracted_with_english: record.contracted_with_english.clone(),
        contracted_with_arabic: record.contracted_with_arabic.clone(),
        contract_subject_english: record.contract_subject_english.clone(),
        contract_subject_arabic: record.contract_subject_arabic.clone(),
        starting_date: record.starting_date.clone(),
        end_date: record.end_date.clone(),
        duration: record.duration.clone(),
        authorized_person_name: record.authorized_person_name.clone(),
        authorized_person_name_arabic: record.authorized_person_name_arabic.clone(),
        fp_phone: record.fp_phone.clone(),
        number_of_iraqis: record.number_of_iraqis.clone(),
        number_of_internationals: record.number_of_internationals.clone(),
        number_of_vehicles: record.number_of_vehicles.clone(),
        purpose_of_entry: record.purpose_of_entry.clone(),
        purpose_of_entry_arabic: record.purpose_of_entry_arabic.clone(),
    }
}

fn clearance_request(record: &ApplicationRecord) -> ClearanceRequestPage {
    ClearanceRequestPage {
        letterhead: letterhead(record),
        clearance_type: record.clearance_type.as_str().to_string(),
        clearance_type_arabic: record.clearance_type.arabic().to_string(),
        duration: record.duration.clone(),
        company_name_english: record.company_name_english.clone(),
        company_name_arabic: record.company_name_arabic.clone(),
        contract_number: record.contract_number.clone(),
        contracted_with_english: record.contracted_with_english.clone(),
        contracted_with_arabic: record.contracted_with_arabic.clone(),
        number_of_iraqis: record.number_of_iraqis.clone(),
        number_of_internationals: record.number_of_internationals.clone(),
        number_of_vehicles: record.number_of_vehicles.clone(),
        number_of_weapons: record.number_of_weapons.clone(),
        signatory: signatory(record),
    }
}

fn authorization_letter(record: &ApplicationRecord) -> AuthorizationLetterPage {
    AuthorizationLetterPage {
        letterhead: letterhead(record),
        company_name_english: record.company_name_english.clone(),
        company_name_arabic: record.company_name_arabic.clone(),
        contract_number: record.contract_number.clone(),
        contracted_with_english: record.contracted_with_english.clone(),
        contracted_with_arabic: record.contracted_with_arabic.clone(),
        authorized_person_name: record.authorized_person_name.clone(),
        authorized_person_name_arabic: record.authorized_person_name_arabic.clone(),
        authorized_person_id: record.authorized_person_id.clone(),
        authorization_start_date: record.authorization_start_date.clone(),
        authorization_end_date: record.authorization_end_date.clone(),
        contact_info: record.contact_info.clone(),
        signatory: signatory(record),
    }
}

fn pledge_letter(record: &ApplicationRecord) -> PledgeLetterPage {
    PledgeLetterPage {
        letterhead: letterhead(record),
        clearance_type: record.clearance_type.as_str().to_string(),
        company_name_english: record.company_name_english.clone(),
        company_name_arabic: record.company_name_arabic.clone(),
        contract_number: record.contract_number.clone(),
        contracted_with_english: record.contracted_with_english.clone(),
        contracted_with_arabic: record.contracted_with_arabic.clone(),
        number_of_iraqis: record.number_of_iraqis.clone(),
        number_of_internationals: record.number_of_internationals.clone(),
        number_of_vehicles: record.number_of_vehicles.clone(),
        number_of_weapons: record.number_of_weapons.clone(),
        signatory: signatory(record),
    }
}

fn long_term_pledge(record: &ApplicationRecord) -> LongTermPledgePage {
    LongTermPledgePage {
        letterhead: letterhead(record),
        company_name_english: record.company_name_english.clone(),
        company_name_arabic: record.company_name_arabic.clone(),
        contract_number: record.contract_number.clone(),
        contracted_with_english: record.contracted_with_english.clone(),
        contracted_with_arabic: record.contracted_with_arabic.clone(),
        signatory: signatory(record),
    }
}

fn visa_pledge(record: &ApplicationRecord) -> VisaPledgePage {
    VisaPledgePage {
        letterhead: letterhead(record),
        company_name_english: record.company_name_english.clone(),
        company_name_arabic: record.company_name_arabic.clone(),
        contract_number: record.contract_number.clone(),
        contracted_with_english: record.contracted_with_english.clone(),
        contracted_with_arabic: record.contracted_with_arabic.clone(),
        number_of_internationals: record.number_of_internationals.clone(),
        signatory: signatory(record),
    }
}

fn page_rows(record: &ApplicationRecord, table: TableType, start: usize, end: usize) -> RosterRows {
    match table {
        TableType::InternationalStaff => {
            RosterRows::Staff(record.international_staff[start..end].to_vec())
        }
        TableType::LocalStaff => RosterRows::Staff(record.local_staff[start..end].to_vec()),
        TableType::Vehicles => RosterRows::Vehicles(record.vehicles[start..end].to_vec()),
        TableType::Weapons => RosterRows::Weapons(record.weapons[start..end].to_vec()),
    }
}

/// Paginate one roster kind into its run of table pages.
///
/// Page `i` carries rows `i*rpp .. min((i+1)*rpp, len)`; concatenating all
/// pages' rows reconstructs the roster in order. An empty roster still
/// yields one page of blank rows.
#[must_use = "builds the page run for a roster kind"]
pub fn paginate_roster(record: &ApplicationRecord, table: TableType) -> Vec<RosterTablePage> {
    let len = record.roster_len(table);
    let rows_per_page = table.rows_per_page();
    let pages = total_pages(len, rows_per_page);

    (0..pages)
        .map(|page_index| {
            let start = page_index * rows_per_page;
            let end = ((page_index + 1) * rows_per_page).min(len);
            // An empty roster's single page slices 0..0.
            let start = start.min(len);
            RosterTablePage {
                table,
                page_index,
                total_pages: pages,
                start_index: start,
                rows: page_rows(record, table, start, end),
                letterhead: letterhead(record),
                signatory: signatory(record),
            }
        })
        .collect()
}

/// Assemble the complete ordered page list for one application record.
///
/// Fixed order: main form, clearance request, authorization letter, pledge
/// letter, then for non-permanent clearances the long-term and visa pledge
/// letters, then one table run per non-empty roster (international staff,
/// local staff, vehicles, weapons), and finally the QR summary page.
#[must_use = "assembles the ordered page list"]
pub fn assemble(record: &ApplicationRecord) -> Vec<PageViewModel> {
    let mut pages = vec![
        PageViewModel::MainForm(main_form(record)),
        PageViewModel::ClearanceRequest(clearance_request(record)),
        PageViewModel::AuthorizationLetter(authorization_letter(record)),
        PageViewModel::PledgeLetter(pledge_letter(record)),
    ];

    if record.clearance_type != ClearanceType::Permanent {
        pages.push(PageViewModel::LongTermPledge(long_term_pledge(record)));
        pages.push(PageViewModel::VisaPledge(visa_pledge(record)));
    }

    for table in TableType::ALL {
        if record.roster_len(table) > 0 {
            pages.extend(
                paginate_roster(record, table)
                    .into_iter()
                    .map(PageViewModel::RosterTable),
            );
        }
    }

    pages.push(PageViewModel::QrSummary(QrSummaryPage {
        summary: QrSummary::from_record(record),
    }));

    log::debug!(
        "Assembled {} pages for contract {:?}",
        pages.len(),
        record.contract_number
    );
    pages
}
