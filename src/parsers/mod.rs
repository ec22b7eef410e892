//! JSON parsers for context export files
//!
//! # Error Handling Strategy
//!
//! An export file is a single JSON document, so there is no line-level recovery:
//! the file either decodes into an [`ExportRecord`](crate::models::ExportRecord)
//! or fails with a typed [`ProcessError`](crate::error::ProcessError). Callers
//! decide what a failure means; the batch processor records it and moves on.
//!
//! Inside a document every field is optional and content shapes are decoded
//! leniently by the [`deserializers`] module, so only structurally broken JSON
//! (or a top-level value that is not an object) fails.

pub mod deserializers;
pub mod export;

pub use export::{parse_export_file, parse_export_str};
