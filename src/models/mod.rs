//! Data models for exported conversation logs.
//!
//! This module defines the data structures read from a context export:
//!
//! - [`ExportRecord`] - One exported document (timestamp, export ID, messages, context)
//! - [`MessageRecord`] - A single logged message and its optional envelope
//! - [`ContextInfo`] - Project context captured alongside the messages
//! - [`Content`] / [`ContentItem`] - Polymorphic message content
//!
//! Every field is optional in the export format. The polymorphic shapes are decoded
//! by the custom deserializers in the `parsers::deserializers` module.

pub mod content;
pub mod export;

pub use content::{Content, ContentItem};
pub use export::{ContextInfo, ExportRecord, MessageBody, MessageRecord};
