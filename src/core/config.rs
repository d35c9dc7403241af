//! Configuration management for the catalog shell.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::storage::StorageConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site identification.
    pub site: SiteConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Where favorites are persisted.
    pub storage: StorageConfig,

    /// Background preloading.
    pub preload: PreloadConfig,

    /// View loading.
    pub views: ViewsConfig,
}

/// Site identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Name shown in the header.
    pub name: String,

    /// The version of the site.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Background preload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreloadConfig {
    /// Whether preloading runs at all.
    pub enabled: bool,

    /// Constrained device or network: skip preloading.
    pub save_data: bool,

    /// How many of the most viewed tool pages to warm.
    pub popular: usize,
}

/// View loading configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewsConfig {
    /// Simulated latency of every view load, in milliseconds.
    pub latency_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Toolbox".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            save_data: false,
            popular: 6,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `TOOLBOX_`.
    /// For example: `TOOLBOX_SITE_NAME`, `TOOLBOX_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("TOOLBOX_SITE_NAME") {
            config.site.name = name;
        }

        if let Ok(level) = std::env::var("TOOLBOX_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.storage = StorageConfig::from_env();

        if let Ok(enabled) = std::env::var("TOOLBOX_PRELOAD") {
            config.preload.enabled = parse_flag(&enabled, true);
        }

        if let Ok(save_data) = std::env::var("TOOLBOX_SAVE_DATA") {
            config.preload.save_data = parse_flag(&save_data, false);
            if config.preload.save_data {
                info!("Save-data mode enabled");
            }
        }

        if let Ok(popular) = std::env::var("TOOLBOX_PRELOAD_POPULAR") {
            match popular.parse() {
                Ok(n) => config.preload.popular = n,
                Err(_) => warn!("Ignoring invalid TOOLBOX_PRELOAD_POPULAR={}", popular),
            }
        }

        if let Ok(latency) = std::env::var("TOOLBOX_VIEW_LATENCY_MS") {
            match latency.parse() {
                Ok(ms) => config.views.latency_ms = ms,
                Err(_) => warn!("Ignoring invalid TOOLBOX_VIEW_LATENCY_MS={}", latency),
            }
        }

        config
    }
}

fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_preload_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLBOX_SAVE_DATA", "yes");
            std::env::set_var("TOOLBOX_PRELOAD_POPULAR", "2");
        }
        let config = Config::from_env();
        assert!(config.preload.save_data);
        assert_eq!(config.preload.popular, 2);
        unsafe {
            std::env::remove_var("TOOLBOX_SAVE_DATA");
            std::env::remove_var("TOOLBOX_PRELOAD_POPULAR");
        }
    }

    #[test]
    fn test_storage_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLBOX_STORAGE", "memory");
        }
        let config = Config::from_env();
        assert_eq!(config.storage, StorageConfig::Memory);
        unsafe {
            std::env::remove_var("TOOLBOX_STORAGE");
        }
    }

    #[test]
    fn test_invalid_number_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLBOX_VIEW_LATENCY_MS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.views.latency_ms, 0);
        unsafe {
            std::env::remove_var("TOOLBOX_VIEW_LATENCY_MS");
        }
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("ON", false));
        assert!(!parse_flag("0", true));
        assert!(parse_flag("maybe", true));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.site.name, "Toolbox");
        assert!(config.preload.enabled);
        assert!(!config.preload.save_data);
    }
}
