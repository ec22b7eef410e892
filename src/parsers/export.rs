use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de;
use serde_json::Value;

use crate::error::ProcessError;
use crate::models::ExportRecord;
use crate::utils::validate_file_size;

/// Read and decode one export file
pub fn parse_export_file(path: &Path) -> Result<ExportRecord, ProcessError> {
    // Validate size on the handle we read from
    let file =
        File::open(path).map_err(|source| ProcessError::Read { path: path.to_path_buf(), source })?;
    validate_file_size(&file, path)?;

    let mut text = String::new();
    BufReader::new(file)
        .read_to_string(&mut text)
        .map_err(|source| ProcessError::Read { path: path.to_path_buf(), source })?;

    parse_export_str(&text).map_err(|source| ProcessError::Parse { path: path.to_path_buf(), source })
}

/// Decode an export document from text. A leading UTF-8 BOM is tolerated.
///
/// The document must be a JSON object; arrays and scalars are rejected rather than
/// decoded by position.
pub fn parse_export_str(text: &str) -> Result<ExportRecord, serde_json::Error> {
    match serde_json::from_str::<Value>(text.strip_prefix('\u{feff}').unwrap_or(text))? {
        value @ Value::Object(_) => serde_json::from_value(value),
        _ => Err(de::Error::custom("export must be a JSON object")),
    }
}
