//! # QuickBoard Core
//!
//! The domain layer of QuickBoard: posts, the post store and the feed views.
//! Persistence is reached only through the [`ports::PostBackend`] trait.

pub mod domain;
pub mod error;
pub mod feed;
pub mod ports;
pub mod store;

pub use error::{PersistenceError, StoreError};
pub use store::PostStore;
