//! Domains module containing the catalog's business logic.
//!
//! Each subdomain represents a specific area of functionality:
//! the tool catalog itself, the route table and view dispatch, and the
//! user's persisted favorites.

pub mod catalog;
pub mod favorites;
pub mod routes;
