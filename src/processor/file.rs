use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ProcessError;
use crate::formatters::{Labels, build_report};
use crate::parsers::parse_export_file;
use crate::utils::{display_file_name, output_path_for};

/// Result of processing one export file
#[derive(Debug)]
pub struct FileOutcome {
    pub source: PathBuf,
    /// Path of the written report, or why none was written
    pub result: Result<PathBuf, ProcessError>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn source_name(&self) -> String {
        display_file_name(&self.source)
    }
}

/// Read one export, render it and write `formatted_<stem>.txt` into `output_dir`
///
/// Never panics or aborts on bad input; every failure is captured in the outcome.
pub fn process_file(source: &Path, output_dir: &Path, labels: &Labels) -> FileOutcome {
    FileOutcome { source: source.to_path_buf(), result: render_to_file(source, output_dir, labels) }
}

fn render_to_file(
    source: &Path,
    output_dir: &Path,
    labels: &Labels,
) -> Result<PathBuf, ProcessError> {
    let record = parse_export_file(source)?;
    let report = build_report(&record, &display_file_name(source), labels);

    let output_path = output_path_for(source, output_dir);
    fs::write(&output_path, report)
        .map_err(|source| ProcessError::Write { path: output_path.clone(), source })?;

    debug!(source = %source.display(), output = %output_path.display(), "wrote report");
    Ok(output_path)
}
