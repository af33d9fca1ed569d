//! In-memory backend - used for tests and ephemeral runs.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quickboard_core::PersistenceError;
use quickboard_core::ports::{PostBackend, PostDocument};

/// Keeps the last saved document in memory.
#[derive(Default)]
pub struct InMemoryBackend {
    document: RwLock<Option<PostDocument>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already persisted document.
    pub fn with_document(document: PostDocument) -> Self {
        Self {
            document: RwLock::new(Some(document)),
        }
    }

    /// Copy of the last saved document.
    pub async fn snapshot(&self) -> Option<PostDocument> {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl PostBackend for InMemoryBackend {
    async fn load(&self) -> Result<Option<PostDocument>, PersistenceError> {
        Ok(self.snapshot().await)
    }

    async fn save(&self, document: &PostDocument) -> Result<(), PersistenceError> {
        *self.document.write().await = Some(document.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
