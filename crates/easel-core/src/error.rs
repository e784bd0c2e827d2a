//! Error types for canvas storage and validation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a canvas store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Canvas '{0}' not found")]
    CanvasNotFound(String),

    #[error("Element '{0}' not found")]
    ElementNotFound(String),

    /// Locked elements only accept changes to the lock flag itself
    #[error("Element '{0}' is locked")]
    ElementLocked(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Corrupt canvas file {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::CanvasNotFound(_) | StoreError::ElementNotFound(_)
        )
    }
}

/// Rejected field values on canvases and elements
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a hex color like #3B82F6, got '{value}'")]
    InvalidColor { field: &'static str, value: String },

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("line elements have no size")]
    LineWithSize,

    #[error("{0} elements with a fill need a size")]
    MissingSize(&'static str),
}
