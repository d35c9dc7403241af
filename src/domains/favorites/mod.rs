//! Favorites domain module.
//!
//! Favorites are the tools a user has marked, persisted as full tool
//! snapshots in one storage slot. Snapshots rather than ids are stored on
//! purpose: a favorite stays renderable after its catalog entry is renamed
//! or removed.
//!
//! The store is the only writer of the slot. Every fallible step (reading,
//! parsing, writing) is handled inside the store; callers only ever see the
//! current list.

mod error;
mod store;

pub use error::FavoritesError;
pub use store::{FAVORITES_SLOT, FavoritesState, FavoritesStore};
