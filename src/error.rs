//! Error types for the entity model

use thiserror::Error;

/// Main error type for entity model operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// A null/empty shared reference or a degenerate vector was assigned
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed for this entity type
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A table entry with the same name is already registered
    #[error("Duplicate table entry: {0}")]
    DuplicateEntry(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for entity model operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}
