//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod persistence;

pub use persistence::{PostBackend, PostDocument};
