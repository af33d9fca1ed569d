//! Application state - shared across all handlers.

use std::sync::Arc;

use quickboard_core::ports::PostBackend;
use quickboard_core::{PostStore, StoreError};
use quickboard_infra::{InMemoryBackend, JsonFileBackend};

use crate::config::StoreConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostStore>,
}

impl AppState {
    /// Open the post store on the configured backend.
    pub async fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let backend: Arc<dyn PostBackend> = match config {
            StoreConfig::File(path) => {
                tracing::info!(path = %path.display(), "Using JSON file store");
                Arc::new(JsonFileBackend::new(path.clone()))
            }
            StoreConfig::Memory => {
                tracing::warn!("Using in-memory store - posts are lost on restart");
                Arc::new(InMemoryBackend::new())
            }
        };

        let store = PostStore::open(backend).await?;

        tracing::info!(posts = store.len().await, "Application state initialized");

        Ok(Self::from_store(store))
    }

    pub fn from_store(store: PostStore) -> Self {
        Self {
            posts: Arc::new(store),
        }
    }
}
