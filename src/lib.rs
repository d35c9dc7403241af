//! Tool Catalog Library
//!
//! This crate provides the catalog behind a directory of small web tools:
//! the tool records, their categories, a route table with on-demand views,
//! search, and persisted favorites.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, storage backends, presentation
//!   collaborators and the shell
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: Tool records, categories, registry and search
//!   - **routes**: Route table, lazy view dispatch and preloading
//!   - **favorites**: The persisted favorites list
//!
//! # Example
//!
//! ```rust,no_run
//! use tool_catalog::{Config, Shell};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let shell = Shell::new(Config::from_env())?;
//!     let _background = shell.start();
//!     shell.navigate("/tools/bmi-calculator").settled().await;
//!     println!("{}", shell.render());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, Shell};
