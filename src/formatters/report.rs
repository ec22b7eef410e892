use crate::formatters::{Labels, format_context, format_messages, format_timestamp_value};
use crate::models::ExportRecord;
use crate::utils::value_to_text;

const BANNER_WIDTH: usize = 80;
const SECTION_RULE_WIDTH: usize = 40;
const MISSING_EXPORT_ID: &str = "N/A";

/// Build the full text report for one export
///
/// Layout: banner with the source file name, export time and ID, then the message
/// section (only when there are messages) and the context section (only when the
/// context object has keys). Lines are joined with `\n` and there is no trailing newline.
pub fn build_report(record: &ExportRecord, source_name: &str, labels: &Labels) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(SECTION_RULE_WIDTH);

    let mut lines = vec![
        banner.clone(),
        format!("{} - {}", labels.banner_title, source_name),
        banner,
        String::new(),
        format!("{}: {}", labels.export_time, format_timestamp_value(record.timestamp.as_ref())),
        format!(
            "{}: {}",
            labels.export_id,
            record
                .export_id
                .as_ref()
                .map(value_to_text)
                .unwrap_or_else(|| MISSING_EXPORT_ID.to_string())
        ),
        String::new(),
    ];

    let messages = record.messages();
    if !messages.is_empty() {
        lines.push(format!("{}:", labels.session_messages));
        lines.push(rule.clone());
        lines.extend(format_messages(messages));
    }

    if let Some(context) = record.context() {
        lines.push(format!("{}:", labels.context_information));
        lines.push(rule);
        lines.extend(format_context(context, labels));
    }

    lines.join("\n")
}
