use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::models::{Content, ContentItem, ContextInfo, MessageBody, MessageRecord};
use crate::utils::{is_truthy, value_to_text};

const ITEM_TYPE_TOOL_USE: &str = "tool_use";
const ITEM_TYPE_TOOL_RESULT: &str = "tool_result";
const DEFAULT_TOOL_NAME: &str = "unknown";

/// Custom deserializer for the `message` field that accepts an envelope object or any bare value
pub fn deserialize_message_body<'de, D>(deserializer: D) -> Result<Option<MessageBody>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(message_body_from_value))
}

/// Custom deserializer for `messages`: falsy values (`null`, `""`, `{}`, `0`, ...) mean no
/// messages; otherwise it must be an array of objects
pub fn deserialize_messages<'de, D>(deserializer: D) -> Result<Option<Vec<MessageRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) if !items.is_empty() => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(_) => serde_json::from_value(item)
                    .map_err(|e| Error::custom(format!("message {}: {}", i + 1, e))),
                _ => Err(Error::custom(format!("message {} must be an object", i + 1))),
            })
            .collect::<Result<Vec<MessageRecord>, D::Error>>()
            .map(Some),
        Some(value) if is_truthy(&value) => Err(Error::custom("messages must be an array")),
        _ => Ok(None),
    }
}

/// Custom deserializer for `context`: falsy values mean no context; otherwise it must be an object
pub fn deserialize_context<'de, D>(deserializer: D) -> Result<Option<ContextInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) if is_truthy(&value) => {
            serde_json::from_value(value).map(Some).map_err(D::Error::custom)
        }
        Some(value) if is_truthy(&value) => Err(Error::custom("context must be an object")),
        _ => Ok(None),
    }
}

pub fn message_body_from_value(value: Value) -> MessageBody {
    match value {
        Value::Object(mut map) => {
            let role = map.remove("role").filter(|r| !r.is_null());
            let content = map.remove("content").map(content_from_value).unwrap_or_default();
            MessageBody::Envelope { role, content }
        }
        other => MessageBody::Bare(content_from_value(other)),
    }
}

pub fn content_from_value(value: Value) -> Content {
    match value {
        Value::String(text) => Content::Text(text),
        Value::Array(items) => Content::Items(items.into_iter().map(content_item_from_value).collect()),
        other => Content::Raw(other),
    }
}

pub fn content_item_from_value(value: Value) -> ContentItem {
    let Value::Object(mut map) = value else {
        return ContentItem::Scalar(value);
    };

    let item_type = map.get("type").and_then(Value::as_str).map(str::to_owned);
    match item_type.as_deref() {
        Some(ITEM_TYPE_TOOL_USE) => ContentItem::ToolUse {
            name: map
                .get("name")
                .map(value_to_text)
                .unwrap_or_else(|| DEFAULT_TOOL_NAME.to_string()),
            input: map.remove("input").unwrap_or_else(|| Value::Object(Map::new())),
        },
        Some(ITEM_TYPE_TOOL_RESULT) => ContentItem::ToolResult {
            is_error: map.get("is_error").is_some_and(is_truthy),
            content: map.remove("content").unwrap_or_else(|| Value::String(String::new())),
        },
        _ => ContentItem::Block(map),
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(content_from_value)
    }
}

impl<'de> Deserialize<'de> for ContentItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(content_item_from_value)
    }
}
