//! Fuzzy header matching.
//!
//! Operator-supplied spreadsheets rarely use the canonical column names
//! verbatim: "Vehicle Number (Plate)" should still land in
//! `vehicleNumber`. Headers are case-folded with separators (spaces,
//! punctuation) stripped, then matched by substring containment in either
//! direction.

/// Case-fold a header for matching: lower-cased, separators dropped.
fn fold(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find the source header matching a canonical column name.
///
/// A header `H` matches canonical `C` iff, after folding, `H` contains `C`
/// or `C` contains `H`. The first matching header in source order wins.
/// Total function: never panics, `None` when nothing matches.
///
/// When two headers both loosely match one canonical column (e.g. "ID" and
/// "IDNumber" against `idNumber`), the first in source order is claimed.
/// That order is whatever the file declares, so files with reordered
/// columns can resolve differently; the distributed templates use the
/// canonical names to keep results stable.
///
/// # Examples
///
/// ```rust
/// use tasreeh_import::match_header;
///
/// let headers = vec!["SN".to_string(), "Vehicle Number (Plate)".to_string()];
/// assert_eq!(match_header(&headers, "vehicleNumber"), Some("Vehicle Number (Plate)"));
/// assert_eq!(match_header(&headers, "weaponType"), None);
/// ```
#[must_use = "returns the matched header, if any"]
pub fn match_header<'a>(headers: &'a [String], canonical: &str) -> Option<&'a str> {
    let canonical_folded = fold(canonical);
    if canonical_folded.is_empty() {
        return None;
    }
    headers
        .iter()
        .find(|header| {
            let header_folded = fold(header);
            !header_folded.is_empty()
                && (header_folded.contains(&canonical_folded)
                    || canonical_folded.contains(&header_folded))
        })
        .map(String::as_str)
}
