//! Plain-text rendering of export records.
//!
//! Each formatter is a pure function from model types to strings:
//!
//! - [`timestamp`] - ISO-8601 strings to `YYYY-MM-DD HH:MM:SS`, raw text on failure
//! - [`content`] - flattens polymorphic message content
//! - [`messages`] - numbered message blocks
//! - [`context`] - labelled context sections
//! - [`report`] - assembles the full document for one export
//!
//! Wording of headers and markers comes from [`labels`].

pub mod content;
pub mod context;
pub mod labels;
pub mod messages;
pub mod report;
pub mod timestamp;

pub use content::format_content;
pub use context::format_context;
pub use labels::{Labels, Locale};
pub use messages::format_messages;
pub use report::build_report;
pub use timestamp::{format_timestamp_value, normalize_timestamp};
