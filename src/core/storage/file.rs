//! File-backed storage.
//!
//! Each slot is a file `<dir>/<slot>.json`. Writes go to a temporary file
//! that is then renamed over the slot, so a slot is always either the old or
//! the new full value.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{StorageBackend, StorageError, StorageResult};

/// Storage backend writing one file per slot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

#[async_trait]
impl StorageBackend for FileStorage {
    async fn read(&self, slot: &str) -> StorageResult<Option<String>> {
        match tokio::fs::read_to_string(self.slot_path(slot)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            // Non-UTF-8 content is the slot's problem, not the backend's.
            Err(e) if e.kind() == ErrorKind::InvalidData => Ok(Some(String::new())),
            Err(e) => Err(StorageError::io(slot, e)),
        }
    }

    async fn write(&self, slot: &str, value: &str) -> StorageResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::io(slot, e))?;

        let target = self.slot_path(slot);
        let tmp = self.dir.join(format!(".{}.json.tmp", slot));

        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| storage_write_error(slot, e))?;
        tokio::fs::rename(&tmp, &target)
            .await
            .map_err(|e| StorageError::io(slot, e))?;

        debug!("Wrote {} bytes to {}", value.len(), target.display());
        Ok(())
    }

    async fn remove(&self, slot: &str) -> StorageResult<()> {
        match tokio::fs::remove_file(self.slot_path(slot)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(slot, e)),
        }
    }
}

fn storage_write_error(slot: &str, e: std::io::Error) -> StorageError {
    match e.kind() {
        ErrorKind::StorageFull | ErrorKind::QuotaExceeded => StorageError::quota(slot),
        ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem => {
            StorageError::unavailable(e.to_string())
        }
        _ => StorageError::io(slot, e),
    }
}
