//! Page serialization module
//!
//! Serializers for turning assembled page view-models into self-contained
//! markup fragments (HTML) or structured output (JSON) for the external
//! print engine.

pub mod html;
pub mod json;

pub use html::{HtmlOptions, HtmlSerializer};
pub use json::{JsonOptions, JsonSerializer};
