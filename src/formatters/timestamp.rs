use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::utils::value_to_text;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// `%.f` also matches an absent fractional part; `%#z` accepts `+08`, `+0800` and `+08:00`
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Normalize an ISO-8601 timestamp to `YYYY-MM-DD HH:MM:SS`
///
/// Accepts a trailing `Z` or a numeric offset, and renders the wall-clock time in
/// that offset. Anything that does not parse is returned unchanged.
///
/// # Examples
///
/// ```
/// use context_export_formatter::formatters::normalize_timestamp;
///
/// assert_eq!(normalize_timestamp("2024-01-15T10:30:00.123Z"), "2024-01-15 10:30:00");
/// assert_eq!(normalize_timestamp("yesterday"), "yesterday");
/// ```
pub fn normalize_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Normalize an optional JSON timestamp field. Missing becomes an empty string and
/// non-string values are returned in their text form.
pub fn format_timestamp_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => normalize_timestamp(s),
        Some(other) => value_to_text(other),
        None => String::new(),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    // UTC designator becomes an explicit zero offset
    let raw = match raw.strip_suffix('Z') {
        Some(rest) => Cow::Owned(format!("{}+00:00", rest)),
        None => Cow::Borrowed(raw),
    };
    let raw: &str = &raw;

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.naive_local())
        .or_else(|| NAIVE_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok()))
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
