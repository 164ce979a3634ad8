//! Error types for the export layer.

use thiserror::Error;

/// Errors that can occur while building or writing calendar files.
#[derive(Error, Debug)]
pub enum IcsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calendar validation failed: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type IcsResult<T> = Result<T, IcsError>;
