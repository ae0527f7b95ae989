//! # Tasreeh Core - Application Model and Document Assembly
//!
//! Core types and logic for the security-clearance application document
//! set: the application record with its four rosters, the roster table
//! schemas shared with the import pipeline, document assembly into an
//! ordered page list, and serialization of those pages into self-contained
//! HTML fragments or JSON for the external print engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use tasreeh_core::{assemble, ApplicationRecord, HtmlSerializer};
//!
//! let record: ApplicationRecord =
//!     serde_json::from_str(r#"{"contractNumber":"HFY-2024-017"}"#)?;
//!
//! let pages = assemble(&record);
//! let html = HtmlSerializer::new().serialize_document(&pages);
//! assert!(html.contains("HFY-2024-017"));
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`record`] - The application record, rosters and the QR projection
//! - [`table`] - Table kinds, canonical columns, row maps and validation
//! - [`assemble`] - Page-list assembly and roster pagination
//! - [`page`] - Page view-model variants and their projections
//! - [`serializer`] - HTML and JSON output
//! - [`mod@format`] - Import format detection and size cap
//! - [`text`] - Bilingual number-to-words helpers
//! - [`error`] - Error types and handling
//!
//! Assembly never fails: absent record data renders as empty output or
//! silently omits conditional pages. Strict validation happens earlier, at
//! import and form-submission time.

pub mod assemble;
pub mod error;
pub mod format;
pub mod page;
pub mod record;
pub mod serializer;
pub mod table;
pub mod text;

// Re-exports for convenience
pub use assemble::{assemble, paginate_roster, total_pages};
pub use error::{Result, TasreehError};
pub use format::{ImportFormat, MAX_IMPORT_BYTES};
pub use page::*;
pub use record::*;
pub use serializer::*;
pub use table::{NormalizedRow, RawRow, TableType, ValidationResult};
