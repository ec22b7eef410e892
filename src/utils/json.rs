use serde_json::Value;

/// Text form of a JSON value: strings verbatim, everything else as compact JSON
///
/// # Examples
///
/// ```
/// use context_export_formatter::utils::value_to_text;
/// use serde_json::json;
///
/// assert_eq!(value_to_text(&json!("plain")), "plain");
/// assert_eq!(value_to_text(&json!({"a": 1})), r#"{"a":1}"#);
/// ```
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Loose truthiness used for flags such as `is_error`.
/// `false`, `null`, `0`, `""`, `[]` and `{}` are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
