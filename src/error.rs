//! Error types for layout construction and simulation.

use thiserror::Error;

/// Errors raised by the layout engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The point set or a call argument is malformed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A focus index outside the point set
    #[error("index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    /// Settings rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
