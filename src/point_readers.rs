//! Point set readers
//!
//! Both formats accept a bare matrix (`[[0, 0], [1, 0]]`) or a map with a
//! `points` key.

use std::fs;
use std::path::Path;

use crate::io::{IoError, IoResult, Reader};
use crate::points::PointSet;

/// Reader for JSON point sets
pub struct JsonPointReader;

impl JsonPointReader {
    /// Create a new JSON reader
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonPointReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader for JsonPointReader {
    fn read(&self, input: &Path) -> IoResult<PointSet> {
        let content = fs::read_to_string(input)?;
        serde_json::from_str(&content).map_err(|e| IoError::Parse(e.to_string()))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// Reader for YAML point sets
pub struct YamlPointReader;

impl YamlPointReader {
    /// Create a new YAML reader
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlPointReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader for YamlPointReader {
    fn read(&self, input: &Path) -> IoResult<PointSet> {
        let content = fs::read_to_string(input)?;
        serde_yaml::from_str(&content).map_err(|e| IoError::Parse(e.to_string()))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn json_reader_supports_json_only() {
        let reader = JsonPointReader::new();
        assert!(reader.supports_extension("json"));
        assert!(reader.supports_extension("JSON"));
        assert!(!reader.supports_extension("yaml"));
    }

    #[test]
    fn yaml_reader_supports_yaml_extensions() {
        let reader = YamlPointReader::new();
        assert!(reader.supports_extension("yaml"));
        assert!(reader.supports_extension("yml"));
        assert!(reader.supports_extension("YML"));
        assert!(!reader.supports_extension("json"));
    }

    #[test]
    fn json_reader_parses_fixture() {
        let points = JsonPointReader::new()
            .read(Path::new("tests/fixtures/triangle.json"))
            .expect("Should parse JSON points");

        assert_eq!(points.row(0), &[0.0, 0.0]);
        assert_eq!(points.row(1), &[1.0, 0.0]);
        assert_eq!(points.row(2), &[0.0, 1.0]);
    }

    #[test]
    fn yaml_reader_parses_wrapped_points() {
        let (_dir, path) = write_temp("points.yaml", "points:\n  - [0, 0, 1]\n  - [2, 2, 2]\n");

        let points = YamlPointReader::new()
            .read(&path)
            .expect("Should parse YAML points");

        assert_eq!(points.len(), 2);
        assert_eq!(points.dim(), 3);
    }

    #[test]
    fn yaml_reader_rejects_non_finite_values() {
        let (_dir, path) = write_temp("points.yaml", "- [0.0, .nan]\n- [1.0, 2.0]\n");

        let err = YamlPointReader::new().read(&path).unwrap_err();
        assert!(matches!(err, IoError::Parse(_)));
    }

    #[test]
    fn json_reader_rejects_ragged_rows() {
        let (_dir, path) = write_temp("points.json", "[[0.0, 1.0], [2.0]]");

        let err = JsonPointReader::new().read(&path).unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = JsonPointReader::new()
            .read(Path::new("tests/fixtures/does_not_exist.json"))
            .unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
