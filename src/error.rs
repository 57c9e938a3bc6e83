//! Custom error types for settings storage.
//!
//! This module provides fine-grained error handling for the key-value
//! backends and the settings layer built on top of them.

use thiserror::Error;

/// Main error type for settings-store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No platform config directory is available for the file backend.
    #[error("Could not find a config directory for this platform")]
    ConfigDirUnavailable,

    /// Reading or writing the backing file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted JSON is malformed, or a value could not be serialized.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for settings-store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
