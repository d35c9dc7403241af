//! Routes domain module.
//!
//! This module maps URL paths to views that are loaded on demand.
//!
//! ## Architecture
//!
//! - `table.rs` - Declarative route table (pattern -> view id)
//! - `views.rs` - View implementations and the `Page` they render
//! - `loader.rs` - On-demand view loading
//! - `dispatcher.rs` - Navigation, placeholder and last-navigation-wins
//! - `preload.rs` - Best-effort background warm-up
//! - `error.rs` - Route and view error types
//!
//! ## Adding a New Page
//!
//! 1. Add a `ViewId` variant and bind its path in `RouteTable::builtin()`
//! 2. Implement `View` for it in `views.rs`
//! 3. Return it from `BundleLoader::load()`

mod dispatcher;
mod error;
mod loader;
mod preload;
mod table;
mod views;

pub use dispatcher::{Dispatcher, Navigation, Screen};
pub use error::{RouteError, ViewError};
pub use loader::{BundleLoader, ViewLoader};
pub use preload::{PreloadHandle, Preloader};
pub use table::{RouteMatch, RouteParams, RoutePattern, RouteTable, ViewId};
pub use views::{NotFoundView, Page, RenderContext, View};
