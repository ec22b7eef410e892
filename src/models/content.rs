use serde_json::{Map, Value};

/// Message content in one of the shapes found in exports
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Plain text, rendered verbatim
    Text(String),
    /// Ordered list of typed content blocks
    Items(Vec<ContentItem>),
    /// Any other value (a single object, number, boolean, null)
    Raw(Value),
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

/// One element of a structured content list, keyed on its `type` discriminant
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    ToolUse {
        name: String,
        input: Value,
    },
    ToolResult {
        content: Value,
        is_error: bool,
    },
    /// Text blocks and every other object-shaped block
    Block(Map<String, Value>),
    /// A bare scalar inside the list
    Scalar(Value),
}
