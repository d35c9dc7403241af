//! Catalog domain module.
//!
//! This module models every tool and category as data. The catalog is built
//! once at startup and is read-only afterwards, so it can be shared freely.
//!
//! ## Architecture
//!
//! - `definitions/` - Topical tool lists (one file per topic)
//! - `tool.rs` - The `Tool` snapshot type
//! - `categories.rs` - Category index with default fallback
//! - `registry.rs` - Merge step and lookup structure
//! - `search.rs` - Pure search/filter service

pub mod definitions;
mod categories;
mod registry;
mod search;
mod tool;

pub use categories::{Category, CategoryIndex};
pub use registry::{DuplicateTool, Recategorized, RegistrationReport, ToolRegistry};
pub use search::{SearchQuery, search};
pub use tool::{Icon, Tool};
