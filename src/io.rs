//! Reader/Writer traits and format dispatch
//!
//! Readers load a [`PointSet`] from disk and point writers save one;
//! writers serialize a [`LayoutSnapshot`] for a renderer. All are looked up
//! through a [`FormatRegistry`], points by file extension and snapshots by
//! format id.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::LayoutError;
use crate::point_readers::{JsonPointReader, YamlPointReader};
use crate::point_writers::{JsonPointWriter, YamlPointWriter};
use crate::points::PointSet;
use crate::snapshot::LayoutSnapshot;
use crate::snapshot_writers::{JsonSnapshotWriter, YamlSnapshotWriter};

/// Errors that can occur during reading or writing
#[derive(Error, Debug)]
pub enum IoError {
    /// The file format is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The file extension could not be determined
    #[error("could not determine file format from path: {0}")]
    UnknownExtension(String),

    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A parsing error occurred
    #[error("parse error: {0}")]
    Parse(String),

    /// A serialization error occurred
    #[error("write error: {0}")]
    Write(String),

    /// The loaded data was rejected by the layout engine
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Result type for reader/writer operations
pub type IoResult<T> = Result<T, IoError>;

/// A reader parses a point set file
pub trait Reader {
    /// Parse the input file into a validated point set
    fn read(&self, input: &Path) -> IoResult<PointSet>;

    /// File extensions this reader can handle (e.g., ["yaml", "yml"])
    fn supported_extensions(&self) -> &[&str];

    /// Check if this reader can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// A point writer serializes a point set
pub trait PointWriter {
    /// Render the point set as text
    fn render(&self, points: &PointSet) -> IoResult<String>;

    /// File extensions this writer produces
    fn supported_extensions(&self) -> &[&str];

    fn supports_extension(&self, ext: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Write the rendered point set to the output path
    fn write(&self, points: &PointSet, output: &Path) -> IoResult<()> {
        let content = self.render(points)?;
        fs::write(output, content)?;
        Ok(())
    }
}

/// A writer serializes layout snapshots
pub trait Writer {
    /// Render the snapshot as text
    fn render(&self, snapshot: &LayoutSnapshot) -> IoResult<String>;

    /// Identifier for this output format (e.g., "json", "yaml")
    fn format_id(&self) -> &str;

    /// Write the rendered snapshot to the output path
    fn write(&self, snapshot: &LayoutSnapshot, output: &Path) -> IoResult<()> {
        let content = self.render(snapshot)?;
        fs::write(output, content)?;
        Ok(())
    }
}

/// Registry of available readers and writers
pub struct FormatRegistry {
    readers: Vec<Box<dyn Reader>>,
    point_writers: Vec<Box<dyn PointWriter>>,
    writers: Vec<Box<dyn Writer>>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            readers: Vec::new(),
            point_writers: Vec::new(),
            writers: Vec::new(),
        }
    }

    /// Create a registry with the JSON and YAML readers and writers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_reader(Box::new(JsonPointReader::new()));
        registry.register_reader(Box::new(YamlPointReader::new()));
        registry.register_point_writer(Box::new(JsonPointWriter::new()));
        registry.register_point_writer(Box::new(YamlPointWriter::new()));
        registry.register_writer(Box::new(JsonSnapshotWriter::new()));
        registry.register_writer(Box::new(YamlSnapshotWriter::new()));
        registry
    }

    /// Register a reader
    pub fn register_reader(&mut self, reader: Box<dyn Reader>) {
        self.readers.push(reader);
    }

    /// Register a point writer
    pub fn register_point_writer(&mut self, writer: Box<dyn PointWriter>) {
        self.point_writers.push(writer);
    }

    /// Register a writer
    pub fn register_writer(&mut self, writer: Box<dyn Writer>) {
        self.writers.push(writer);
    }

    /// Find a reader for the given file extension
    pub fn reader_for_extension(&self, ext: &str) -> Option<&dyn Reader> {
        self.readers
            .iter()
            .find(|r| r.supports_extension(ext))
            .map(|r| r.as_ref())
    }

    /// Find a point writer for the given file extension
    pub fn point_writer_for_extension(&self, ext: &str) -> Option<&dyn PointWriter> {
        self.point_writers
            .iter()
            .find(|w| w.supports_extension(ext))
            .map(|w| w.as_ref())
    }

    /// Find a writer by format ID
    pub fn writer_for_format(&self, format_id: &str) -> Option<&dyn Writer> {
        self.writers
            .iter()
            .find(|w| w.format_id().eq_ignore_ascii_case(format_id))
            .map(|w| w.as_ref())
    }

    /// Get file extension from a path
    pub fn extension_from_path(path: &Path) -> Option<&str> {
        path.extension().and_then(|e| e.to_str())
    }

    /// Find a reader for the given path based on its extension
    pub fn reader_for_path(&self, path: &Path) -> IoResult<&dyn Reader> {
        let ext = Self::extension_from_path(path)
            .ok_or_else(|| IoError::UnknownExtension(path.display().to_string()))?;

        self.reader_for_extension(ext)
            .ok_or_else(|| IoError::UnsupportedFormat(ext.to_string()))
    }

    /// Read a point set, picking the reader from the path's extension
    pub fn read_points(&self, path: &Path) -> IoResult<PointSet> {
        self.reader_for_path(path)?.read(path)
    }

    /// Write a point set, picking the writer from the path's extension
    pub fn write_points(&self, points: &PointSet, path: &Path) -> IoResult<()> {
        let ext = Self::extension_from_path(path)
            .ok_or_else(|| IoError::UnknownExtension(path.display().to_string()))?;
        let writer = self
            .point_writer_for_extension(ext)
            .ok_or_else(|| IoError::UnsupportedFormat(ext.to_string()))?;
        writer.write(points, path)
    }

    /// Find a writer by format ID, failing for unknown formats
    pub fn writer(&self, format_id: &str) -> IoResult<&dyn Writer> {
        self.writer_for_format(format_id)
            .ok_or_else(|| IoError::UnsupportedFormat(format_id.to_string()))
    }
}
