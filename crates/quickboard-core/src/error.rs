//! Domain-level error types.

use thiserror::Error;

/// Store errors - failures of a post store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Post not found: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

/// Persistence backend errors.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to read store: {0}")]
    Read(String),

    #[error("Failed to write store: {0}")]
    Write(String),

    #[error("Store document is malformed: {0}")]
    Malformed(String),
}
