use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::formatters::Labels;
use crate::processor::file::{FileOutcome, process_file};

const EXPORT_EXTENSION: &str = "json";

/// Outcomes of a batch run, in discovery order
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Find `*.json` files directly inside `export_dir`, sorted by file name
///
/// Subdirectories are not searched. Returns an empty Vec if the directory doesn't
/// exist (not an error).
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be read.
pub fn discover_export_files(export_dir: &Path) -> Result<Vec<PathBuf>> {
    if !export_dir.exists() {
        warn!(dir = %export_dir.display(), "export directory does not exist");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(export_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to read export directory: {}", export_dir.display())
        })?;

        // Follows symlinks, so a linked export is picked up
        let path = entry.path();
        let is_export = path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(EXPORT_EXTENSION);
        if is_export {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Process every file independently. One failure never stops the others.
///
/// With `parallel` the files are rendered on the rayon pool; outcomes keep the
/// input order either way.
pub fn process_batch(
    files: &[PathBuf],
    output_dir: &Path,
    labels: &Labels,
    parallel: bool,
) -> BatchSummary {
    let started = Instant::now();

    let outcomes: Vec<FileOutcome> = if parallel {
        files.par_iter().map(|file| process_file(file, output_dir, labels)).collect()
    } else {
        files.iter().map(|file| process_file(file, output_dir, labels)).collect()
    };

    for outcome in &outcomes {
        if let Err(e) = &outcome.result {
            warn!(
                file = %outcome.source.display(),
                path = %e.path().display(),
                error = %e,
                "failed to process export"
            );
        }
    }

    let summary = BatchSummary { outcomes };
    info!(
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch finished"
    );
    summary
}

/// Discover exports in `export_dir` and write reports into `output_dir`, creating it if needed
///
/// # Errors
///
/// Returns an error if the export directory cannot be read or the output directory
/// cannot be created. Per-file failures are reported in the [`BatchSummary`].
pub fn process_directory(
    export_dir: &Path,
    output_dir: &Path,
    labels: &Labels,
    parallel: bool,
) -> Result<BatchSummary> {
    let files = discover_export_files(export_dir)?;
    if files.is_empty() {
        return Ok(BatchSummary::default());
    }

    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    Ok(process_batch(&files, output_dir, labels, parallel))
}
