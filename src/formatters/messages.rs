use crate::formatters::{format_content, format_timestamp_value};
use crate::models::MessageRecord;

/// Render every message as a numbered block, in input order
///
/// Each block reads `"<n>. [<ROLE>] <timestamp>\n   <content>\n"` with `n` starting at 1.
/// No message is filtered or merged.
pub fn format_messages(messages: &[MessageRecord]) -> Vec<String> {
    messages.iter().enumerate().map(|(i, message)| format_message(i + 1, message)).collect()
}

fn format_message(index: usize, message: &MessageRecord) -> String {
    let role = message.role().to_uppercase();
    let content = format_content(&message.content());
    let timestamp = format_timestamp_value(message.timestamp.as_ref());

    format!("{}. [{}] {}\n   {}\n", index, role, timestamp, content)
}
