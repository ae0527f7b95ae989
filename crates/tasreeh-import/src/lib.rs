//! # Tasreeh Import - Roster Table Import Pipeline
//!
//! Turns an uploaded spreadsheet or CSV into validated, normalized roster
//! rows for one declared table kind (weapons, vehicles, international or
//! local staff).
//!
//! ## Pipeline
//!
//! ```text
//! bytes + filename ──► size gate ──► extension gate ──► backend parse
//!        (10 MiB)        (csv/xlsx/xls)                 (RawRow per line)
//!                                                            │
//!                                                            ▼
//!                       NormalizedRow[] ◄── normalize ◄── validate
//! ```
//!
//! Parse failures are `Err` and block the import. Validation findings are
//! data: missing required columns block, per-row empty cells only warn —
//! operators may preview documents from incomplete rosters.
//!
//! ## Quick Start
//!
//! ```rust
//! use tasreeh_core::TableType;
//! use tasreeh_import::TableImporter;
//!
//! let csv = "vehicleNumber,vehicleBrand/Type,vehicleColor,workLocation\n\
//!            12345 A,Toyota Hilux,White,Halfaya\n";
//! let result = TableImporter::new()
//!     .import_bytes(csv.as_bytes(), "vehicles.csv", TableType::Vehicles)?;
//!
//! assert!(result.validation.is_valid);
//! assert_eq!(result.rows[0]["vehicleBrand/Type"], "Toyota Hilux");
//! # Ok::<(), tasreeh_core::TasreehError>(())
//! ```

pub mod csv;
pub mod importer;
pub mod matching;
pub mod normalize;
pub mod template;
pub mod traits;
pub mod xlsx;

// Re-exports for convenience
pub use crate::csv::CsvBackend;
pub use importer::{ImportOptions, ImportResult, TableImporter};
pub use matching::match_header;
pub use normalize::{normalize, validate};
pub use template::template_csv;
pub use traits::{ImportBackend, ParsedTable};
pub use xlsx::SpreadsheetBackend;
