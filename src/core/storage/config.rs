//! Storage configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where persisted slots live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageConfig {
    /// One JSON file per slot inside `dir`.
    File {
        #[serde(default = "default_dir")]
        dir: PathBuf,
    },

    /// Process memory only; nothing survives a restart.
    Memory,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".toolbox")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::File { dir: default_dir() }
    }
}

impl StorageConfig {
    /// Create a file storage config.
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self::File { dir: dir.into() }
    }

    /// Load storage config from environment variables.
    pub fn from_env() -> Self {
        let kind = std::env::var("TOOLBOX_STORAGE")
            .unwrap_or_default()
            .to_lowercase();

        match kind.as_str() {
            "memory" => Self::Memory,
            _ => {
                let dir = std::env::var("TOOLBOX_STORAGE_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_dir());
                Self::File { dir }
            }
        }
    }

    /// Get a description of this backend for logging.
    pub fn description(&self) -> String {
        match self {
            Self::File { dir } => format!("file storage in {}", dir.display()),
            Self::Memory => "in-memory storage".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_file() {
        assert_eq!(StorageConfig::default(), StorageConfig::file(".toolbox"));
    }

    #[test]
    fn test_deserialize_tagged() {
        let config: StorageConfig = serde_json::from_str(r#"{"type":"memory"}"#).unwrap();
        assert_eq!(config, StorageConfig::Memory);

        let config: StorageConfig = serde_json::from_str(r#"{"type":"file"}"#).unwrap();
        assert_eq!(config, StorageConfig::default());
    }
}
