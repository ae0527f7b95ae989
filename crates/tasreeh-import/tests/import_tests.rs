//! End-to-end tests for the roster import pipeline, through to document
//! assembly.

use proptest::prelude::*;
use std::io::Write as _;
use tasreeh_core::{
    assemble, ApplicationRecord, PageViewModel, TableImports, TableType, TasreehError,
};
use tasreeh_import::{match_header, template_csv, TableImporter};

#[test]
fn international_staff_csv_imports_cleanly() {
    let csv = "fullName,position,IDNumber,workLocation\n\
               \"Jane Doe\",\"Engineer\",\"P123456\",\"Site A\"\n";
    let result = TableImporter::new()
        .import_bytes(csv.as_bytes(), "roster.csv", TableType::InternationalStaff)
        .unwrap();

    assert!(result.validation.is_valid);
    assert!(result.validation.warnings.is_empty());
    assert_eq!(result.row_count, 1);
    let row = &result.rows[0];
    assert_eq!(row["fullName"], "Jane Doe");
    assert_eq!(row["position"], "Engineer");
    assert_eq!(row["IDNumber"], "P123456");
    assert_eq!(row["workLocation"], "Site A");
}

#[test]
fn missing_licence_column_blocks_weapons_import() {
    let csv = "weaponNumber,weaponType,workLocation\nW-1,Rifle,Site A\n";
    let result = TableImporter::new()
        .import_bytes(csv.as_bytes(), "weapons.csv", TableType::Weapons)
        .unwrap();
    assert!(!result.validation.is_valid);
    assert_eq!(
        result.validation.errors,
        vec!["Missing required columns: licenceId"]
    );
}

#[test]
fn imported_vehicles_override_static_roster_and_paginate() {
    let mut csv = String::from("vehicleNumber,vehicleBrand/Type,vehicleColor,workLocation\n");
    for i in 0..47 {
        csv.push_str(&format!("{i},Hilux,White,Halfaya\n"));
    }
    let result = TableImporter::new()
        .import_bytes(csv.as_bytes(), "vehicles.csv", TableType::Vehicles)
        .unwrap();
    assert!(result.validation.is_valid);
    assert_eq!(result.row_count, 47);

    let mut record = ApplicationRecord::default();
    record.vehicles = vec![Default::default()]; // static roster to be overridden
    let mut imports = TableImports::default();
    imports.set(TableType::Vehicles, result.rows);
    record.apply_imports(&imports);

    assert_eq!(record.vehicles.len(), 47);
    assert_eq!(record.vehicles[0].vehicle_number, "0");
    assert_eq!(record.vehicles[46].vehicle_number, "46");

    let roster_pages: Vec<_> = assemble(&record)
        .into_iter()
        .filter_map(|p| match p {
            PageViewModel::RosterTable(t) if t.table == TableType::Vehicles => Some(t),
            _ => None,
        })
        .collect();
    assert_eq!(roster_pages.len(), 3);
    assert_eq!(
        roster_pages.iter().map(|p| p.rows.len()).collect::<Vec<_>>(),
        vec![20, 20, 7]
    );
    assert!(roster_pages[2].is_last_page());
}

#[test]
fn blank_rows_never_reach_output() {
    let csv = "fullName,position,idNumber,workLocation\nA,p,1,w\n,,,\nB,p,2,w\n";
    let result = TableImporter::new()
        .import_bytes(csv.as_bytes(), "staff.csv", TableType::LocalStaff)
        .unwrap();
    assert_eq!(result.row_count, 2);
    assert_eq!(result.rows[1]["fullName"], "B");
}

#[test]
fn import_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local_staff.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "{}علي حسن,سائق,199012345,الحلفاية\n",
        template_csv(TableType::LocalStaff)
    )
    .unwrap();

    let result = TableImporter::new()
        .import_file(&path, TableType::LocalStaff)
        .unwrap();
    assert!(result.validation.is_valid);
    assert_eq!(result.rows[0]["fullName"], "علي حسن");
    assert_eq!(result.rows[0]["workLocation"], "الحلفاية");
}

#[test]
fn unsupported_and_oversized_files_fail_with_typed_errors() {
    let importer = TableImporter::new();
    assert!(matches!(
        importer.import_bytes(b"x", "roster.pdf", TableType::Weapons),
        Err(TasreehError::UnsupportedFormat(_))
    ));

    let big = vec![b'a'; tasreeh_core::MAX_IMPORT_BYTES + 1];
    assert!(matches!(
        importer.import_bytes(&big, "roster.csv", TableType::Weapons),
        Err(TasreehError::FileTooLarge { .. })
    ));
}

#[test]
fn template_for_every_kind_revalidates() {
    for kind in TableType::ALL {
        let mut content = template_csv(kind);
        content.push_str("a,b,c,d\n");
        let result = TableImporter::new()
            .import_bytes(content.as_bytes(), &kind.template_filename(), kind)
            .unwrap();
        assert!(
            result.validation.is_valid,
            "{kind} template failed: {:?}",
            result.validation.errors
        );
        assert!(result.validation.warnings.is_empty());
    }
}

proptest! {
    /// Already-canonical headers normalize to themselves for any cell
    /// content without commas/quotes/newlines.
    #[test]
    fn canonical_csv_normalization_is_noop(
        number in "[A-Za-z0-9 -]{1,12}",
        kind in "[A-Za-z0-9 -]{1,12}",
        licence in "[A-Za-z0-9 -]{1,12}",
        location in "[A-Za-z0-9 -]{1,12}",
    ) {
        let csv = format!(
            "weaponNumber,weaponType,licenceId,workLocation\n{number},{kind},{licence},{location}\n"
        );
        let result = TableImporter::new()
            .import_bytes(csv.as_bytes(), "weapons.csv", TableType::Weapons)
            .unwrap();
        prop_assume!(result.row_count == 1); // all-blank rows are elided
        let row = &result.rows[0];
        prop_assert_eq!(row["weaponNumber"].as_str(), number.trim());
        prop_assert_eq!(row["weaponType"].as_str(), kind.trim());
        prop_assert_eq!(row["licenceId"].as_str(), licence.trim());
        prop_assert_eq!(row["workLocation"].as_str(), location.trim());
    }
}

proptest! {
    /// A canonical name with arbitrary ASCII casing always matches itself.
    #[test]
    fn case_variants_always_match(flips in prop::collection::vec(any::<bool>(), 10)) {
        let canonical = "vehicleColor";
        let header: String = canonical
            .chars()
            .zip(flips.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        let headers = vec![header.clone()];
        prop_assert_eq!(match_header(&headers, canonical), Some(header.as_str()));
    }
}
