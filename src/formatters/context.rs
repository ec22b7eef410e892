use serde_json::Value;

use crate::formatters::Labels;
use crate::models::ContextInfo;
use crate::utils::value_to_text;

/// Longest code style section kept, in characters
pub const CODE_STYLE_MAX_CHARS: usize = 1000;

/// Render the recognized context sections in fixed order: directory structure, git
/// status, code style. Each present section yields a header line, its text and a
/// blank separator line.
pub fn format_context(context: &ContextInfo, labels: &Labels) -> Vec<String> {
    let mut lines = Vec::new();

    // (header, value, truncate)
    let sections: [(&str, Option<&Value>, bool); 3] = [
        (labels.directory_structure, context.directory_structure.as_ref(), false),
        (labels.git_status, context.git_status.as_ref(), false),
        (labels.code_style, context.code_style.as_ref(), true),
    ];

    for (header, value, truncate) in sections {
        let Some(value) = value else {
            continue;
        };

        let mut text = value_to_text(value);
        if truncate {
            text = truncate_code_style(&text, labels.truncation_marker);
        }

        lines.push(format!("{}:", header));
        lines.push(text);
        lines.push(String::new());
    }

    lines
}

/// Keep the first [`CODE_STYLE_MAX_CHARS`] characters and append `marker` when longer
pub fn truncate_code_style(text: &str, marker: &str) -> String {
    match text.char_indices().nth(CODE_STYLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], marker),
        None => text.to_string(),
    }
}
