use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::Content;

/// Top-level document of a context export. All fields are optional.
///
/// Only decode through [`parse_export_str`](crate::parsers::parse_export_str), which
/// rejects documents that are not JSON objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportRecord {
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(rename = "exportId", default)]
    pub export_id: Option<Value>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_messages")]
    pub messages: Option<Vec<MessageRecord>>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_context")]
    pub context: Option<ContextInfo>,
}

impl ExportRecord {
    /// Messages to render; empty when absent or null
    pub fn messages(&self) -> &[MessageRecord] {
        self.messages.as_deref().unwrap_or_default()
    }

    /// Context to render, only when it carries at least one key
    pub fn context(&self) -> Option<&ContextInfo> {
        self.context.as_ref().filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "type", default)]
    pub entry_type: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_message_body"
    )]
    pub message: Option<MessageBody>,
}

/// The `message` field of a record
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    /// Object form; `role` and `content` override the record's own fields
    Envelope { role: Option<Value>, content: Content },
    /// Any non-object value, used as the content directly
    Bare(Content),
}

const DEFAULT_ROLE: &str = "unknown";

impl MessageRecord {
    /// Role from the envelope when present, otherwise the record's `type`
    pub fn role(&self) -> String {
        let envelope_role = match &self.message {
            Some(MessageBody::Envelope { role: Some(role), .. }) => Some(role),
            _ => None,
        };

        envelope_role
            .or(self.entry_type.as_ref())
            .map(crate::utils::value_to_text)
            .unwrap_or_else(|| DEFAULT_ROLE.to_string())
    }

    pub fn content(&self) -> Content {
        match &self.message {
            Some(MessageBody::Envelope { content, .. }) => content.clone(),
            Some(MessageBody::Bare(content)) => content.clone(),
            None => Content::default(),
        }
    }
}

/// Context captured with the export. Only three keys are rendered; the rest are kept
/// so that an object holding only unrecognized keys still counts as non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContextInfo {
    #[serde(rename = "directoryStructure", default)]
    pub directory_structure: Option<Value>,
    #[serde(rename = "gitStatus", default)]
    pub git_status: Option<Value>,
    #[serde(rename = "codeStyle", default)]
    pub code_style: Option<Value>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl ContextInfo {
    pub fn is_empty(&self) -> bool {
        self.directory_structure.is_none()
            && self.git_status.is_none()
            && self.code_style.is_none()
            && self.other.is_empty()
    }
}
