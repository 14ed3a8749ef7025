//! Point set writers (JSON and YAML)
//!
//! Output is a bare matrix, which both point readers accept.

use crate::io::{IoError, IoResult, PointWriter};
use crate::points::PointSet;

/// Compact JSON output
pub struct JsonPointWriter;

impl JsonPointWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonPointWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PointWriter for JsonPointWriter {
    fn render(&self, points: &PointSet) -> IoResult<String> {
        serde_json::to_string(points).map_err(|e| IoError::Write(e.to_string()))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// YAML output
pub struct YamlPointWriter;

impl YamlPointWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlPointWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PointWriter for YamlPointWriter {
    fn render(&self, points: &PointSet) -> IoResult<String> {
        serde_yaml::to_string(points).map_err(|e| IoError::Write(e.to_string()))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Reader;
    use crate::point_readers::{JsonPointReader, YamlPointReader};

    fn sample() -> PointSet {
        PointSet::new(vec![vec![0.0, 1.5], vec![-2.0, 3.25]]).unwrap()
    }

    #[test]
    fn json_writer_emits_bare_matrix() {
        let text = JsonPointWriter::new().render(&sample()).unwrap();
        assert_eq!(text, "[[0.0,1.5],[-2.0,3.25]]");
    }

    #[test]
    fn yaml_writer_supports_both_extensions() {
        let writer = YamlPointWriter::new();
        assert!(writer.supports_extension("yaml"));
        assert!(writer.supports_extension("YML"));
        assert!(!writer.supports_extension("json"));
    }

    #[test]
    fn written_files_are_readable() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("points.json");
        JsonPointWriter::new().write(&sample(), &json).unwrap();
        assert_eq!(JsonPointReader::new().read(&json).unwrap(), sample());

        let yaml = dir.path().join("points.yml");
        YamlPointWriter::new().write(&sample(), &yaml).unwrap();
        assert_eq!(YamlPointReader::new().read(&yaml).unwrap(), sample());
    }
}
