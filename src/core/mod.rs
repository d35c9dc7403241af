//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the catalog,
//! including error handling, configuration, persistence backends, the
//! presentation collaborators and the shell that wires everything together.

pub mod collaborators;
pub mod config;
pub mod error;
pub mod shell;
pub mod storage;
pub mod terminal;

pub use config::Config;
pub use error::{Error, Result};
pub use shell::{Shell, Startup};
pub use storage::{StorageBackend, StorageConfig};
pub use terminal::Terminal;
