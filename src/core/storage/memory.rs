//! In-memory storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{StorageBackend, StorageError, StorageResult};

/// Storage backend keeping slots in process memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with `slot = value`.
    pub fn with_slot(slot: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(slot.into(), value.into());
        }
        storage
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn read(&self, slot: &str) -> StorageResult<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::unavailable("memory storage lock poisoned"))?;
        Ok(slots.get(slot).cloned())
    }

    async fn write(&self, slot: &str, value: &str) -> StorageResult<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::unavailable("memory storage lock poisoned"))?;
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, slot: &str) -> StorageResult<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::unavailable("memory storage lock poisoned"))?;
        slots.remove(slot);
        Ok(())
    }
}
