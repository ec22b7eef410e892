//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test export directories
pub struct ExportDirBuilder {
    temp_dir: TempDir,
}

impl ExportDirBuilder {
    /// Create a new builder with an empty export directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the export directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with raw content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write export file");
        self
    }

    /// Add an export built programmatically
    pub fn with_export(self, name: &str, export: &ExportBuilder) -> Self {
        let content = export.to_json();
        self.with_file(name, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single export document
pub struct ExportBuilder {
    timestamp: Option<String>,
    export_id: Option<String>,
    messages: Vec<Value>,
    context: Option<Value>,
}

impl ExportBuilder {
    /// Create an export with a fixed timestamp and ID and no messages
    pub fn new() -> Self {
        Self {
            timestamp: Some("2024-01-01T00:00:00Z".to_string()),
            export_id: Some("550e8400-e29b-41d4-a716-446655440000".to_string()),
            messages: Vec::new(),
            context: None,
        }
    }

    /// Set the export ID
    pub fn export_id(mut self, id: &str) -> Self {
        self.export_id = Some(id.to_string());
        self
    }

    /// Add a message wrapped in a role/content envelope
    pub fn message(mut self, role: &str, timestamp: &str, content: Value) -> Self {
        self.messages.push(json!({
            "type": role,
            "timestamp": timestamp,
            "message": {"role": role, "content": content},
        }));
        self
    }

    /// Set the context object
    pub fn context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let mut doc = serde_json::Map::new();
        if let Some(ts) = &self.timestamp {
            doc.insert("timestamp".to_string(), json!(ts));
        }
        if let Some(id) = &self.export_id {
            doc.insert("exportId".to_string(), json!(id));
        }
        if !self.messages.is_empty() {
            doc.insert("messages".to_string(), Value::Array(self.messages.clone()));
        }
        if let Some(context) = &self.context {
            doc.insert("context".to_string(), context.clone());
        }
        serde_json::to_string_pretty(&Value::Object(doc)).expect("Failed to serialize export")
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a generated report
pub fn read_report(dir: &Path, stem: &str) -> String {
    let path: PathBuf = dir.join(format!("formatted_{}.txt", stem));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

/// Creates a realistic export with a tool round trip and full context
pub fn realistic_export() -> ExportBuilder {
    ExportBuilder::new()
        .export_id("7d0c2a1e-3b7f-4f0e-9a55-0c1d2e3f4a5b")
        .message("user", "2024-01-01T00:00:01Z", json!("List the source files"))
        .message(
            "assistant",
            "2024-01-01T00:00:02.500Z",
            json!([
                {"type": "text", "text": "I'll look."},
                {"type": "tool_use", "id": "toolu_1", "name": "LS", "input": {"path": "/repo/src"}}
            ]),
        )
        .message(
            "user",
            "2024-01-01T00:00:03Z",
            json!([{"type": "tool_result", "tool_use_id": "toolu_1", "content": "- lib.rs\n- main.rs"}]),
        )
        .context(json!({
            "directoryStructure": "- /repo/\n  - src/",
            "gitStatus": "Current branch: main\n\nStatus:\n(clean)",
            "codeStyle": "Use rustfmt defaults",
            "readme": "ignored"
        }))
}
