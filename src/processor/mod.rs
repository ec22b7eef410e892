//! Export-to-report processing.
//!
//! # Error Handling Strategy
//!
//! Failures are isolated per file:
//!
//! - **File-level errors**: read, size, parse and write failures become a
//!   [`FileOutcome`] holding a [`ProcessError`](crate::error::ProcessError); the
//!   batch moves on to the next file
//! - **Directory-level errors**: an unreadable input directory or an output directory
//!   that cannot be created are returned as `anyhow` errors before any file is touched
//! - **Summary**: [`BatchSummary`] keeps every outcome in discovery order so callers
//!   can report per-file status and the `<succeeded>/<total>` count

pub mod batch;
pub mod file;

pub use batch::{BatchSummary, discover_export_files, process_batch, process_directory};
pub use file::{FileOutcome, process_file};
