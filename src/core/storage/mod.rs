//! Persistence layer for client-side state.
//!
//! This module provides named-slot storage backends:
//! - **File**: one JSON file per slot (default)
//! - **Memory**: process memory only
//!
//! A slot always holds one complete serialized value; callers rewrite the
//! whole slot rather than patching it.

mod config;
mod error;
mod file;
mod memory;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub use config::StorageConfig;
pub use error::{StorageError, StorageResult};
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A named-slot key/value store.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read a slot. `Ok(None)` means the slot was never written.
    async fn read(&self, slot: &str) -> StorageResult<Option<String>>;

    /// Replace the full contents of a slot.
    async fn write(&self, slot: &str, value: &str) -> StorageResult<()>;

    /// Delete a slot. Deleting a missing slot succeeds.
    async fn remove(&self, slot: &str) -> StorageResult<()>;
}

/// Build the backend described by `config`.
pub fn open_storage(config: &StorageConfig) -> Arc<dyn StorageBackend> {
    info!("Using {}", config.description());

    match config {
        StorageConfig::File { dir } => Arc::new(FileStorage::new(dir.clone())),
        StorageConfig::Memory => Arc::new(MemoryStorage::new()),
    }
}
