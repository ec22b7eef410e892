use serde_json::Value;

use crate::models::{Content, ContentItem};
use crate::utils::value_to_text;

const TEXT_FIELD: &str = "text";

/// Flatten message content into text
///
/// Strings are returned verbatim. Lists render one fragment per item, joined with
/// newlines in their original order:
///
/// - `tool_use` → `[TOOL_USE] <name>` and `[INPUT] <pretty JSON>`
/// - `tool_result` → `[TOOL_RESULT] <content>` or `[TOOL_ERROR] <content>`
/// - other objects → their `text` field, or the whole object as JSON
/// - scalars → their text form
///
/// A single object renders its `text` field when present; anything else renders as JSON.
pub fn format_content(content: &Content) -> String {
    match content {
        Content::Text(text) => text.clone(),
        Content::Items(items) => items.iter().map(format_item).collect::<Vec<_>>().join("\n"),
        Content::Raw(Value::Object(map)) => match map.get(TEXT_FIELD) {
            Some(text) => value_to_text(text),
            None => value_to_text(&Value::Object(map.clone())),
        },
        Content::Raw(other) => value_to_text(other),
    }
}

fn format_item(item: &ContentItem) -> String {
    match item {
        ContentItem::ToolUse { name, input } => {
            format!("[TOOL_USE] {}\n[INPUT] {}", name, pretty_json(input))
        }
        ContentItem::ToolResult { content, is_error: true } => {
            format!("[TOOL_ERROR] {}", value_to_text(content))
        }
        ContentItem::ToolResult { content, is_error: false } => {
            format!("[TOOL_RESULT] {}", value_to_text(content))
        }
        ContentItem::Block(map) => match map.get(TEXT_FIELD) {
            Some(text) => value_to_text(text),
            None => serde_json::to_string(map).unwrap_or_default(),
        },
        ContentItem::Scalar(value) => value_to_text(value),
    }
}

/// Two-space indented JSON with non-ASCII kept literal
fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
