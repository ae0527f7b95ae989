//! JSON serialization for assembled pages.
//!
//! The page view-models already implement `Serialize`; this is a
//! convenience wrapper with formatting options.

use crate::page::PageViewModel;
use serde_json::{to_string, to_string_pretty};

/// Options for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonOptions {
    /// Pretty-print with indentation (default: true)
    pub pretty: bool,
}

impl Default for JsonOptions {
    #[inline]
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// JSON serializer for page view-models
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JsonSerializer {
    options: JsonOptions,
}

impl JsonSerializer {
    /// Create a serializer with default options (pretty-printed)
    #[inline]
    #[must_use = "creates serializer with default options"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a serializer with custom options
    #[inline]
    #[must_use = "creates serializer with custom options"]
    pub const fn with_options(options: JsonOptions) -> Self {
        Self { options }
    }

    /// Serialize one page to JSON.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn serialize_page(&self, page: &PageViewModel) -> Result<String, serde_json::Error> {
        if self.options.pretty {
            to_string_pretty(page)
        } else {
            to_string(page)
        }
    }

    /// Serialize the full ordered page list to JSON.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn serialize_document(&self, pages: &[PageViewModel]) -> Result<String, serde_json::Error> {
        if self.options.pretty {
            to_string_pretty(pages)
        } else {
            to_string(pages)
        }
    }
}
