//! Core error types for focuslog-core.
//!
//! Uses thiserror for the error hierarchy. Persistence failures are
//! recoverable by design: the in-memory state stays authoritative and
//! callers log-and-continue rather than abort.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focuslog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Read failed
    #[error("Read failed for key '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// Write failed
    #[error("Write failed for key '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// Stored blob could not be decoded
    #[error("Corrupt data under key '{key}': {message}")]
    Corrupt { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Planned session duration outside the accepted range
    #[error("Duration must be between 1 and 180 minutes, got {minutes}")]
    DurationOutOfRange { minutes: u32 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
