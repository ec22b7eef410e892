use std::borrow::Cow;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::ProcessError;

// Maximum size of a single export file: 50MB
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

const OUTPUT_PREFIX: &str = "formatted_";
const OUTPUT_EXTENSION: &str = "txt";

/// Builds the report path for a source export: `formatted_<stem>.txt` inside `output_dir`
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use context_export_formatter::utils::output_path_for;
///
/// let out = output_path_for(Path::new("/exports/1015_0930_abc.json"), Path::new("/reports"));
/// assert_eq!(out, PathBuf::from("/reports/formatted_1015_0930_abc.txt"));
/// ```
pub fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source.file_stem().map(|s| s.to_string_lossy()).unwrap_or(Cow::Borrowed(""));
    output_dir.join(format!("{}{}.{}", OUTPUT_PREFIX, stem, OUTPUT_EXTENSION))
}

/// Base name of a path for display, falling back to the full path
pub fn display_file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Validates that an export file's size is within acceptable limits (50MB)
///
/// Takes the open file handle so the size checked is the size of the file
/// that will actually be read.
///
/// # Errors
///
/// Returns [`ProcessError::Read`] if metadata cannot be read and
/// [`ProcessError::TooLarge`] if the file exceeds [`MAX_FILE_SIZE_BYTES`].
pub fn validate_file_size(file: &File, path: &Path) -> Result<(), ProcessError> {
    let metadata =
        file.metadata().map_err(|source| ProcessError::Read { path: path.to_path_buf(), source })?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE_BYTES {
        return Err(ProcessError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_FILE_SIZE_BYTES,
        });
    }

    Ok(())
}
