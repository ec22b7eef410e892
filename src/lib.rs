//! Context Export Formatter - turn exported conversation logs into readable text
//!
//! This library reads the JSON documents written by a context export (messages plus
//! project context) and renders each one as a plain-text report. It supports:
//!
//! - Decoding exports whose fields are all optional and whose message content may be a
//!   string, a list of typed blocks, or a single object
//! - Normalizing ISO-8601 timestamps for display
//! - Rendering tool calls and tool results as labelled lines
//! - Processing a directory of exports with per-file error isolation
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use context_export_formatter::{Labels, Locale, process_directory};
//!
//! let labels = Labels::for_locale(Locale::En);
//! let summary = process_directory(
//!     Path::new(".kode/context_export"),
//!     Path::new(".kode/context_export/scripts"),
//!     labels,
//!     false,
//! )?;
//! println!("{}/{} exports formatted", summary.succeeded(), summary.total());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod formatters;
pub mod models;
pub mod parsers;
pub mod processor;
pub mod utils;

// Re-export commonly used types
pub use error::ProcessError;
pub use formatters::{Labels, Locale, build_report, format_content, normalize_timestamp};
pub use models::{Content, ContentItem, ExportRecord};
pub use parsers::parse_export_file;
pub use processor::{BatchSummary, FileOutcome, process_directory, process_file};
