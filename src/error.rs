use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while turning one export file into a report.
/// Always scoped to a single file; a batch never aborts on one of these.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to read file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("file too large ({size} bytes, max {max} bytes)")]
    TooLarge { path: PathBuf, size: u64, max: u64 },
    #[error("failed to parse export: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    /// The file the error refers to (the source for read/parse, the report for write)
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::TooLarge { path, .. }
            | Self::Parse { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}
