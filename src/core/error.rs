//! Error types and handling for the catalog shell.
//!
//! This module defines a unified error type for the few operations that can
//! fail at startup. Once the shell is running, every operation has a total
//! contract and nothing here reaches the renderer.

use thiserror::Error;

/// A specialized Result type for shell operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Error building the route table.
    #[error("Route error: {0}")]
    Route(#[from] crate::domains::routes::RouteError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
