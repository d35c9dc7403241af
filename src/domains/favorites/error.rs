//! Favorites-specific error types.
//!
//! None of these reach callers of the store: they are logged and the store
//! falls back to a safe state. They exist so the recovery paths can be told
//! apart in logs and tests.

use thiserror::Error;

use crate::core::storage::StorageError;

/// Errors that can occur while loading or persisting favorites.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// The persisted value is not a well-formed list of tool snapshots.
    #[error("Corrupted favorites: {0}")]
    Corrupted(String),

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The in-memory list could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl FavoritesError {
    /// Create a new "corrupted" error.
    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::Corrupted(msg.into())
    }
}
