//! Layout snapshot writers (JSON and YAML)

use crate::io::{IoError, IoResult, Writer};
use crate::snapshot::LayoutSnapshot;

/// Pretty-printed JSON output
pub struct JsonSnapshotWriter;

impl JsonSnapshotWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonSnapshotWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for JsonSnapshotWriter {
    fn render(&self, snapshot: &LayoutSnapshot) -> IoResult<String> {
        serde_json::to_string_pretty(snapshot).map_err(|e| IoError::Write(e.to_string()))
    }

    fn format_id(&self) -> &str {
        "json"
    }
}

/// YAML output
pub struct YamlSnapshotWriter;

impl YamlSnapshotWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlSnapshotWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for YamlSnapshotWriter {
    fn render(&self, snapshot: &LayoutSnapshot) -> IoResult<String> {
        serde_yaml::to_string(snapshot).map_err(|e| IoError::Write(e.to_string()))
    }

    fn format_id(&self) -> &str {
        "yaml"
    }
}
