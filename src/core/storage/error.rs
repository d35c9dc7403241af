//! Storage error types.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while reading or writing a storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be used at all (disabled, missing permissions).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused a write because it is full.
    #[error("Storage quota exceeded for slot '{slot}'")]
    QuotaExceeded { slot: String },

    /// IO error while touching the backing file.
    #[error("IO error on slot '{slot}': {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Create an unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a quota error.
    pub fn quota(slot: impl Into<String>) -> Self {
        Self::QuotaExceeded { slot: slot.into() }
    }

    /// Create an IO error for `slot`.
    pub fn io(slot: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            slot: slot.into(),
            source,
        }
    }
}
