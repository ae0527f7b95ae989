//! HTML serialization for assembled pages.
//!
//! Every page serializes to a self-contained fragment: the only coupling
//! between fragments is global stylesheet class names, so the external
//! print engine can concatenate them in any host shell. Arabic runs carry
//! `dir="rtl"`. Roster tables render their full row-slot grid (blank cells
//! past the data) so every printed page has the same physical table height.

use crate::page::{
    AuthorizationLetterPage, ClearanceRequestPage, Letterhead, LongTermPledgePage, MainFormPage,
    PageViewModel, PledgeLetterPage, QrSummaryPage, RosterRows, RosterTablePage, Signatory,
    VisaPledgePage,
};
use crate::table::TableType;
use crate::text::{duration_to_text, Language};
use std::fmt::Write;

/// Address block shown on every roster table page.
const TABLE_ADDRESSEE_EN_1: &str = "To / Security Clearance Office - Missan - Halfaya Representation";
const TABLE_ADDRESSEE_EN_2: &str = "PetroChina - Security Department";
const TABLE_ADDRESSEE_AR: &str =
    "الى / شعبة التصاريح الامنية - ميسان - ممثلية الحلفايا / بتروجاينا - قسم الامن";

/// Options for HTML serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HtmlOptions {
    /// Insert a page-break marker element between consecutive fragments
    /// (never after the last). Default: true.
    pub page_break_markers: bool,
}

impl Default for HtmlOptions {
    #[inline]
    fn default() -> Self {
        Self {
            page_break_markers: true,
        }
    }
}

/// HTML serializer for page view-models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HtmlSerializer {
    options: HtmlOptions,
}

/// Escape text for interpolation into HTML content and attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_letterhead(html: &mut String, letterhead: &Letterhead) {
    if letterhead.header_image_url.is_empty() {
        html.push_str("<div class=\"letterhead letterhead-placeholder\">LETTER HEADER</div>\n");
    } else {
        let _ = writeln!(
            html,
            "<div class=\"letterhead\"><img src=\"{}\" alt=\"Letter Header\"></div>",
            escape(&letterhead.header_image_url)
        );
    }
}

/// Bilingual centered heading: English line, Arabic line right-to-left.
fn push_heading(html: &mut String, english: &str, arabic: &str) {
    let _ = writeln!(
        html,
        "<div class=\"page-heading\"><div>{}</div><div dir=\"rtl\">{}</div></div>",
        escape(english),
        escape(arabic)
    );
}

/// One labelled field line. Empty values still render the label with a
/// blank fill line.
fn push_field(html: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        html,
        "<div class=\"field\"><span class=\"field-label\">{}</span><span class=\"field-value\">{}</span></div>",
        escape(label),
        escape(value)
    );
}

/// Arabic field line, rendered right-to-left.
fn push_field_rtl(html: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        html,
        "<div class=\"field\" dir=\"rtl\"><span class=\"field-label\">{}</span><span class=\"field-value\">{}</span></div>",
        escape(label),
        escape(value)
    );
}

fn push_signature_block(html: &mut String, signatory: &Signatory) {
    html.push_str("<div class=\"signature-block\">\n");
    push_field(html, "Name:", &signatory.manager_name);
    push_field(html, "Position:", &signatory.position);
    push_field(html, "Signature:", "");
    html.push_str("</div>\n");
}

/// Bilingual table title per roster kind.
const fn roster_title(table: TableType) -> (&'static str, &'static str) {
    match table {
        TableType::InternationalStaff => ("International Staff", "الكادر الاجنبي"),
        TableType::LocalStaff => ("Local Staff", "الكادر المحلي"),
        TableType::Vehicles => ("Vehicles List", "العجلات"),
        TableType::Weapons => ("Weapon List", "الاسلحة"),
    }
}

/// Bilingual column headers per roster kind, in render order.
const fn roster_columns(table: TableType) -> [(&'static str, &'static str); 4] {
    match table {
        TableType::InternationalStaff => [
            ("Full name", "الاسم الكامل"),
            ("Position", "العنوان الوظيفي"),
            ("Passport Number", "رقم الجواز"),
            ("Work Location", "موقع العمل"),
        ],
        TableType::LocalStaff => [
            ("Full name", "الاسم الكامل"),
            ("Position", "العنوان الوظيفي"),
            ("ID Number", "رقم الهوية"),
            ("Work Location", "موقع العمل"),
        ],
        TableType::Vehicles => [
            ("Vehicle number/Type", "رقم العجلة - نوع الرقم"),
            ("Vehicle brand/Type", "نوع العجلة"),
            ("Vehicle Color", "لون العجلة"),
            ("Work Location", "موقع العمل"),
        ],
        TableType::Weapons => [
            ("Weapon Number", "رقم السلاح"),
            ("Weapon type", "نوع السلاح"),
            ("Licence ID", "رقم اجازة السلاح"),
            ("Work Location", "موقع العمل"),
        ],
    }
}

fn blank_cells() -> [String; 4] {
    [String::new(), String::new(), String::new(), String::new()]
}

/// Cell values for the row at `index` on this page, blank when past the
/// populated rows.
fn roster_cells(rows: &RosterRows, index: usize) -> [String; 4] {
    match rows {
        RosterRows::Staff(staff) => staff.get(index).map_or_else(blank_cells, |s| {
            [
                s.full_name.clone(),
                s.position.clone(),
                s.id_number.clone(),
                s.work_location.clone(),
            ]
        }),
        RosterRows::Vehicles(vehicles) => vehicles.get(index).map_or_else(blank_cells, |v| {
            [
                v.vehicle_number.clone(),
                v.vehicle_type.clone(),
                v.vehicle_color.clone(),
                v.work_location.clone(),
            ]
        }),
        RosterRows::Weapons(weapons) => weapons.get(index).map_or_else(blank_cells, |w| {
            [
                w.weapon_number.clone(),
                w.weapon_type.clone(),
                w.licence_id.clone(),
                w.work_location.clone(),
            ]
        }),
    }
}

impl HtmlSerializer {
    /// Create a serializer with default options.
    #[inline]
    #[must_use = "creates serializer with default options"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a serializer with custom options.
    #[inline]
    #[must_use = "creates serializer with custom options"]
    pub const fn with_options(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Serialize one page into a self-contained fragment.
    #[must_use = "returns the page's markup fragment"]
    pub fn serialize_page(&self, page: &PageViewModel) -> String {
        match page {
            PageViewModel::MainForm(p) => render_main_form(p),
            PageViewModel::ClearanceRequest(p) => render_clearance_request(p),
            PageViewModel::AuthorizationLetter(p) => render_authorization_letter(p),
            PageViewModel::PledgeLetter(p) => render_pledge_letter(p),
            PageViewModel::LongTermPledge(p) => render_long_term_pledge(p),
            PageViewModel::VisaPledge(p) => render_visa_pledge(p),
            PageViewModel::RosterTable(p) => render_roster_table(p),
            PageViewModel::QrSummary(p) => render_qr_summary(p),
        }
    }

    /// Serialize the ordered page list into one document body.
    ///
    /// A page-break marker separates every fragment from the next; nothing
    /// follows the final fragment.
    #[must_use = "returns the concatenated document markup"]
    pub fn serialize_document(&self, pages: &[PageViewModel]) -> String {
        let mut html = String::new();
        for (i, page) in pages.iter().enumerate() {
            if i > 0 && self.options.page_break_markers {
                html.push_str("<div class=\"page-break\"></div>\n");
            }
            html.push_str(&self.serialize_page(page));
        }
        html
    }
}

fn render_main_form(page: &MainFormPage) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"sheet main-form\">\n");
    push_letterhead(&mut html, &page.letterhead);
    push_heading(
        &mut html,
        "Security Clearance Application Form",
        "استمارة طلب تصريح امني",
    );
    push_field(&mut html, "Entry Approval Type:", &page.entry_approval_type);
    push_field(&mut html, "Clearance Type:", &page.clearance_type);
    push_field(&mut html, "Company Name:", &page.company_name_english);
    push_field_rtl(&mut html, "اسم الشركة:", &page.company_name_arabic);
    push_field(&mut html, "Contracted With:", &page.contracted_with_english);
    push_field_rtl(&mut html, "المتعاقد معها:", &page.contracted_with_arabic);
    push_field(&mut html, "Contract Subject:", &page.contract_subject_english);
    push_field_rtl(&mut html, "موضوع العقد:", &page.contract_subject_arabic);
    push_field(&mut html, "Starting Date:", &page.starting_date);
    push_field(&mut html, "End Date:", &page.end_date);
    let _ = writeln!(
        html,
        "<div class=\"field\"><span class=\"field-label\">Duration:</span><span class=\"field-value\">{} ({})</span></div>",
        escape(&page.duration),
        escape(&duration_to_text(&page.duration, Language::English))
    );
    let _ = writeln!(
        html,
        "<div class=\"field\" dir=\"rtl\"><span class=\"field-label\">المدة:</span><span class=\"field-value\">{}</span></div>",
        escape(&duration_to_text(&page.duration, Language::Arabic))
    );
    push_field(&mut html, "Number of Iraqis:", &page.number_of_iraqis);
    push_field(
        &mut html,
        "Number of Internationals:",
        &page.number_of_internationals,
    );
    push_field(&mut html, "Number of Vehicles:", &page.number_of_vehicles);
    if !page.purpose_of_entry.is_empty() || !page.purpose_of_entry_arabic.is_empty() {
        push_field(&mut html, "Purpose of Entry:", &page.purpose_of_entry);
        push_field_rtl(&mut html, "الغرض من الدخول:", &page.purpose_of_entry_arabic);
    }
    push_field(
        &mut html,
        "Authorized Person:",
        &page.authorized_person_name,
    );
    push_field_rtl(
        &mut html,
        "الشخص المخول:",
        &page.authorized_person_name_arabic,
    );
    push_field(&mut html, "Focal Point Phone:", &page.fp_phone);
    html.push_str("</section>\n");
    html
}

fn render_clearance_request(page: &ClearanceRequestPage) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"sheet clearance-request\">\n");
    push_letterhead(&mut html, &page.letterhead);
    push_heading(
        &mut html,
        "Security Clearance Request",
        "طلب تصريح امني",
    );
    let _ = writeln!(
        html,
        "<p class=\"letter-body\">We kindly request the issuance of a {} security clearance for {} days for our company ({}) contracted with ({}) under contract No. ({}).</p>",
        escape(&page.clearance_type),
        escape(&page.duration),
        escape(&page.company_name_english),
        escape(&page.contracted_with_english),
        escape(&page.contract_number)
    );
    let _ = writeln!(
        html,
        "<p class=\"letter-body\" dir=\"rtl\">نرجو اصدار تصريح امني ({}) لمدة ({}) يوم لشركتنا ({}) المتعاقدة مع ({}) بموجب العقد المرقم ({}).</p>",
        escape(&page.clearance_type_arabic),
        escape(&page.duration),
        escape(&page.company_name_arabic),
        escape(&page.contracted_with_arabic),
        escape(&page.contract_number)
    );
    push_field(&mut html, "Number of Iraqis:", &page.number_of_iraqis);
    push_field(
        &mut html,
        "Number of Internationals:",
        &page.number_of_internationals,
    );
    push_field(&mut html, "Number of Vehicles:", &page.number_of_vehicles);
    push_field(&mut html, "Number of Weapons:", &page.number_of_weapons);
    push_signature_block(&mut html, &page.signatory);
    html.push_str("</section>\n");
    html
}

fn render_authorization_letter(page: &AuthorizationLetterPage) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"sheet authorization-letter\">\n");
    push_letterhead(&mut html, &page.letterhead);
    push_heading(&mut html, "Authorization Letter", "كتاب تخويل");
    let _ = writeln!(
        html,
        "<p class=\"letter-body\">We, ({}), contracted with ({}) under contract No. ({}), authorize Mr./Ms. ({}) holding ID No. ({}) to follow up our security clearance applications from {} to {}. Contact: {}.</p>",
        escape(&page.company_name_english),
        escape(&page.contracted_with_english),
        escape(&page.contract_number),
        escape(&page.authorized_person_name),
        escape(&page.authorized_person_id),
        escape(&page.authorization_start_date),
        escape(&page.authorization_end_date),
        escape(&page.contact_info)
    );
    let _ = writeln!(
        html,
        "<p class=\"letter-body\" dir=\"rtl\">نحن شركة ({}) المتعاقدة مع ({}) بموجب العقد المرقم ({}) نخول السيد/السيدة ({}) حامل الهوية المرقمة ({}) بمتابعة معاملات التصاريح الامنية للفترة من {} الى {}. للاتصال: {}.</p>",
        escape(&page.company_name_arabic),
        escape(&page.contracted_with_arabic),
        escape(&page.contract_number),
        escape(&page.authorized_person_name_arabic),
        escape(&page.authorized_person_id),
        escape(&page.authorization_start_date),
        escape(&page.authorization_end_date),
        escape(&page.contact_info)
    );
    push_signature_block(&mut html, &page.signatory);
    html.push_str("</section>\n");
    html
}

fn render_pledge_letter(page: &PledgeLetterPage) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"sheet pledge-letter\">\n");
    push_letterhead(&mut html, &page.letterhead);
    push_heading(&mut html, "Pledge Letter", "تعهد");
    let _ = writeln!(
        html,
        "<p class=\"letter-body\">We, ({}), contracted with ({}) under contract No. ({}), pledge that the personnel, vehicles and weapons listed in this {} clearance application are under our full responsibility.</p>",
        escape(&page.company_name_english),
        escape(&page.contracted_with_english),
        escape(&page.contract_number),
        escape(&page.clearance_type)
    );
    let _ = writeln!(
        html,
        "<p class=\"letter-body\" dir=\"rtl\">نحن شركة ({}) المتعاقدة مع ({}) بموجب العقد المرقم ({}) نتعهد بأن الاشخاص والعجلات والاسلحة المدرجة في هذا الطلب تحت مسؤوليتنا الكاملة.</p>",
        escape(&page.company_name_arabic),
        escape(&page.contracted_with_arabic),
        escape(&page.contract_number)
    );
    push_field(&mut html, "Number of Iraqis:", &page.number_of_iraqis);
    push_field(
        &mut html,
        "Number of Internationals:",
        &page.number_of_internationals,
    );
    push_field(&mut html, "Number of Vehicles:", &page.number_of_vehicles);
    push_field(&mut html, "Number of Weapons:", &page.number_of_weapons);
    push_signature_block(&mut html, &page.signatory);
    html.push_str("</section>\n");
    html
}

fn render_long_term_pledge(page: &LongTermPledgePage) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"sheet long-term-pledge\">\n");
    push_letterhead(&mut html, &page.letterhead);
    push_heading(&mut html, "Long-Term Entry Pledge", "تعهد دخول طويل الامد");
    let _ = writeln!(
        html,
        "<p class=\"letter-body\">We, ({}), contracted with ({}) under contract No. ({}), pledge to renew this clearance before its expiry and to report any staffing changes.</p>",
        escape(&page.company_name_english),
        escape(&page.contracted_with_english),
        escape(&page.contract_number)
    );
    let _ = writeln!(
        html,
        "<p class=\"letter-body\" dir=\"rtl\">نحن شركة ({}) المتعاقدة مع ({}) بموجب العقد المرقم ({}) نتعهد بتجديد هذا التصريح قبل انتهائه وابلاغكم بأي تغيير في الملاكات.</p>",
        escape(&page.company_name_arabic),
        escape(&page.contracted_with_arabic),
        escape(&page.contract_number)
    );
    push_signature_block(&mut html, &page.signatory);
    html.push_str("</section>\n");
    html
}

fn render_visa_pledge(page: &VisaPledgePage) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"sheet visa-pledge\">\n");
    push_letterhead(&mut html, &page.letterhead);
    push_heading(&mut html, "Visa Pledge", "تعهد سمات الدخول");
    let _ = writeln!(
        html,
        "<p class=\"letter-body\">We, ({}), contracted with ({}) under contract No. ({}), confirm that our ({}) international staff hold valid entry visas and residency documents.</p>",
        escape(&page.company_name_english),
        escape(&page.contracted_with_english),
        escape(&page.contract_number),
        escape(&page.number_of_internationals)
    );
    let _ = writeln!(
        html,
        "<p class=\"letter-body\" dir=\"rtl\">نحن شركة ({}) المتعاقدة مع ({}) بموجب العقد المرقم ({}) نؤكد ان منتسبينا الاجانب يحملون سمات دخول واقامات نافذة.</p>",
        escape(&page.company_name_arabic),
        escape(&page.contracted_with_arabic),
        escape(&page.contract_number)
    );
    push_signature_block(&mut html, &page.signatory);
    html.push_str("</section>\n");
    html
}

fn render_roster_table(page: &RosterTablePage) -> String {
    let (title_en, title_ar) = roster_title(page.table);
    let columns = roster_columns(page.table);
    let rows_per_page = page.table.rows_per_page();

    let mut html = String::new();
    let _ = writeln!(
        html,
        "<section class=\"sheet roster-table {}\">",
        page.table.as_str().replace('_', "-")
    );
    push_letterhead(&mut html, &page.letterhead);

    html.push_str("<div class=\"page-heading\">\n");
    let _ = writeln!(html, "<div>{TABLE_ADDRESSEE_EN_1}</div>");
    let _ = writeln!(html, "<div>{TABLE_ADDRESSEE_EN_2}</div>");
    let _ = writeln!(html, "<div dir=\"rtl\">{TABLE_ADDRESSEE_AR}</div>");
    let _ = write!(
        html,
        "<div class=\"table-title\">{} - <span dir=\"rtl\">{}</span>",
        escape(title_en),
        escape(title_ar)
    );
    if page.total_pages > 1 {
        let _ = write!(
            html,
            " <span class=\"page-counter\">(Page {} of {})</span>",
            page.page_index + 1,
            page.total_pages
        );
    }
    html.push_str("</div>\n</div>\n");

    html.push_str("<table class=\"roster\">\n<thead>\n<tr><th class=\"sn\">SN</th>");
    for (en, ar) in columns {
        let _ = write!(
            html,
            "<th><div>{}</div><div dir=\"rtl\">{}</div></th>",
            escape(en),
            escape(ar)
        );
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    // Full slot grid: blank rows keep every page the same height, serial
    // numbers continue across pages.
    for slot in 0..rows_per_page {
        let serial = page.start_index + slot + 1;
        let cells = roster_cells(&page.rows, slot);
        let _ = write!(html, "<tr><td class=\"sn\">{serial}</td>");
        for cell in &cells {
            let _ = write!(html, "<td>{}</td>", escape(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");

    if page.is_last_page() {
        push_signature_block(&mut html, &page.signatory);
    }
    html.push_str("</section>\n");
    html
}

fn render_qr_summary(page: &QrSummaryPage) -> String {
    // The payload is serialized here; encoding it into an actual QR image
    // is the external encoder's job.
    let payload = serde_json::to_string(&page.summary).unwrap_or_default();

    let mut html = String::new();
    html.push_str("<section class=\"sheet qr-summary\">\n");
    push_heading(
        &mut html,
        "QR Code - Security Clearance Application Data",
        "رمز الاستجابة السريعة - بيانات طلب التصريح الأمني",
    );
    let _ = writeln!(
        html,
        "<div class=\"qr-code\" data-payload=\"{}\"></div>",
        escape(&payload)
    );
    html.push_str(
        "<p class=\"qr-note\"><strong>Note:</strong> Scan the QR code to get the data in JSON format.</p>\n",
    );
    html.push_str(
        "<p class=\"qr-note\" dir=\"rtl\"><strong>ملاحظة:</strong> امسح رمز الاستجابة السريعة للحصول على البيانات بتنسيق JSON.</p>\n",
    );
    html.push_str("</section>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble;
    use crate::record::{ApplicationRecord, ClearanceType, Vehicle};

    fn vehicle_record(n: usize) -> ApplicationRecord {
        ApplicationRecord {
            clearance_type: ClearanceType::Permanent,
            manager_name: "Omar K.".into(),
            position: "HSE Manager".into(),
            vehicles: (0..n)
                .map(|i| Vehicle {
                    vehicle_number: format!("{} <A>", 1000 + i),
                    vehicle_type: "Hilux".into(),
                    vehicle_color: "White".into(),
                    work_location: "Halfaya".into(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape("العجلات"), "العجلات");
    }

    #[test]
    fn test_document_page_break_count() {
        let pages = assemble(&vehicle_record(1));
        let html = HtmlSerializer::new().serialize_document(&pages);
        let breaks = html.matches("<div class=\"page-break\"></div>").count();
        assert_eq!(breaks, pages.len() - 1);
        assert!(!html.trim_end().ends_with("<div class=\"page-break\"></div>"));
    }

    #[test]
    fn test_document_without_page_breaks() {
        let pages = assemble(&vehicle_record(1));
        let serializer = HtmlSerializer::with_options(HtmlOptions {
            page_break_markers: false,
        });
        let html = serializer.serialize_document(&pages);
        assert!(!html.contains("page-break"));
    }

    #[test]
    fn test_roster_table_full_slot_grid() {
        let pages = assemble(&vehicle_record(7));
        let table_html = pages
            .iter()
            .find_map(|p| match p {
                PageViewModel::RosterTable(t) => Some(render_roster_table(t)),
                _ => None,
            })
            .unwrap();
        // 20 slots render regardless of only 7 populated rows.
        assert_eq!(table_html.matches("<tr><td class=\"sn\">").count(), 20);
        assert!(table_html.contains("<td class=\"sn\">1</td>"));
        assert!(table_html.contains("<td class=\"sn\">20</td>"));
        // Cell text is escaped.
        assert!(table_html.contains("1000 &lt;A&gt;"));
        assert!(!table_html.contains("1000 <A>"));
    }

    #[test]
    fn test_roster_serial_numbers_continue_across_pages() {
        let record = vehicle_record(47);
        let html: Vec<String> = assemble(&record)
            .iter()
            .filter_map(|p| match p {
                PageViewModel::RosterTable(t) => Some(render_roster_table(t)),
                _ => None,
            })
            .collect();
        assert_eq!(html.len(), 3);
        assert!(html[1].contains("<td class=\"sn\">21</td>"));
        assert!(html[2].contains("<td class=\"sn\">41</td>"));
        assert!(html[2].contains("<td class=\"sn\">60</td>"));
    }

    #[test]
    fn test_signature_only_on_last_roster_page() {
        let record = vehicle_record(47);
        let runs: Vec<String> = assemble(&record)
            .iter()
            .filter_map(|p| match p {
                PageViewModel::RosterTable(t) => Some(render_roster_table(t)),
                _ => None,
            })
            .collect();
        assert!(!runs[0].contains("signature-block"));
        assert!(!runs[1].contains("signature-block"));
        assert!(runs[2].contains("signature-block"));
        assert!(runs[2].contains("Omar K."));
    }

    #[test]
    fn test_roster_page_counter_only_on_multi_page_runs() {
        let single = assemble(&vehicle_record(3));
        let html = HtmlSerializer::new().serialize_document(&single);
        assert!(!html.contains("(Page 1 of 1)"));

        let multi = assemble(&vehicle_record(21));
        let html = HtmlSerializer::new().serialize_document(&multi);
        assert!(html.contains("(Page 1 of 2)"));
        assert!(html.contains("(Page 2 of 2)"));
    }

    #[test]
    fn test_qr_payload_embedded_and_escaped() {
        let record = ApplicationRecord {
            contract_number: "C-77".into(),
            number_of_weapons: "4".into(),
            ..Default::default()
        };
        let pages = assemble(&record);
        let html = HtmlSerializer::new().serialize_document(&pages);
        assert!(html.contains("data-payload=\"{&quot;contractNumber&quot;:&quot;C-77&quot;"));
        assert!(html.contains("&quot;weaponsCount&quot;:4"));
    }

    #[test]
    fn test_letterhead_placeholder_when_missing() {
        let html = render_roster_table(&crate::page::RosterTablePage {
            table: TableType::Weapons,
            page_index: 0,
            total_pages: 1,
            start_index: 0,
            rows: RosterRows::Weapons(vec![]),
            letterhead: Letterhead::default(),
            signatory: Signatory::default(),
        });
        assert!(html.contains("LETTER HEADER"));
        assert!(html.contains("رقم السلاح"));
    }

    #[test]
    fn test_arabic_runs_are_rtl() {
        let pages = assemble(&ApplicationRecord::default());
        let html = HtmlSerializer::new().serialize_document(&pages);
        assert!(html.contains("dir=\"rtl\""));
    }
}
