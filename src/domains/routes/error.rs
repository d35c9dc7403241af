//! Route and view error types.

use thiserror::Error;

use super::table::ViewId;

/// Errors raised while building the route table.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A path pattern could not be parsed.
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl RouteError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// No view implementation exists for this id.
    #[error("No view bundle for {0}")]
    Missing(ViewId),

    /// The loader failed.
    #[error("Failed to load {view}: {reason}")]
    LoadFailed { view: ViewId, reason: String },
}

impl ViewError {
    /// Create a "missing" error.
    pub fn missing(view: ViewId) -> Self {
        Self::Missing(view)
    }

    /// Create a "load failed" error.
    pub fn load_failed(view: ViewId, reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            view,
            reason: reason.into(),
        }
    }
}
