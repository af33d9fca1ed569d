//! # QuickBoard Infrastructure
//!
//! Concrete implementations of the ports defined in `quickboard-core`.
//!
//! - [`JsonFileBackend`] - the post document as one JSON file on disk
//! - [`InMemoryBackend`] - no disk access, state lives for the process only

pub mod persistence;

pub use persistence::{InMemoryBackend, JsonFileBackend};
