//! Error types for the KeySearch library.
//!
//! All errors are represented by the [`KeySearchError`] enum. The search
//! engine itself is total over its inputs and never returns an error; the
//! variants here cover the collaborators around it (storage, import/export,
//! CLI).

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for KeySearch operations.
#[derive(Error, Debug)]
pub enum KeySearchError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Import-related errors (malformed export files, etc.)
    #[error("Import error: {0}")]
    Import(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KeySearchError.
pub type Result<T> = std::result::Result<T, KeySearchError>;

impl KeySearchError {
    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        KeySearchError::Storage(msg.into())
    }

    /// Create a new import error.
    pub fn import<S: Into<String>>(msg: S) -> Self {
        KeySearchError::Import(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        KeySearchError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KeySearchError::Other(msg.into())
    }
}
