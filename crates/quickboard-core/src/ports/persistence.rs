use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Post;
use crate::error::PersistenceError;

/// The whole persisted state: `{ "posts": [...] }` in storage order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl PostDocument {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

/// Persistence backend - abstraction over where the post document lives
/// (JSON file, in-memory).
///
/// Backends only move whole documents; they never see individual posts.
#[async_trait]
pub trait PostBackend: Send + Sync {
    /// Load the persisted document, `None` if nothing has been persisted yet.
    async fn load(&self) -> Result<Option<PostDocument>, PersistenceError>;

    /// Replace the persisted document in full.
    async fn save(&self, document: &PostDocument) -> Result<(), PersistenceError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}
