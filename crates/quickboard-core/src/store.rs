//! Post store - owns the post collection and serializes every mutation
//! through a single lock spanning snapshot, change, persist and commit.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::StoreError;
use crate::ports::{PostBackend, PostDocument};

const REQUIRED_FIELDS_MESSAGE: &str = "Title, description, and tag are required";

/// Post store backed by an injected persistence backend.
///
/// The in-memory snapshot only changes after the backend accepted the new
/// document, so a failed write is never visible to later reads.
pub struct PostStore {
    backend: Arc<dyn PostBackend>,
    posts: Mutex<Vec<Post>>,
}

impl PostStore {
    /// Load the persisted document, initializing an empty one if none exists.
    pub async fn open(backend: Arc<dyn PostBackend>) -> Result<Self, StoreError> {
        let posts = match backend.load().await? {
            Some(document) => {
                tracing::debug!(
                    backend = %backend.describe(),
                    posts = document.posts.len(),
                    "Loaded post document"
                );
                document.posts
            }
            None => {
                tracing::info!(
                    backend = %backend.describe(),
                    "No post document found, initializing empty store"
                );
                backend.save(&PostDocument::default()).await?;
                Vec::new()
            }
        };

        Ok(Self {
            backend,
            posts: Mutex::new(posts),
        })
    }

    /// All posts in storage order.
    pub async fn list(&self) -> Vec<Post> {
        self.posts.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.posts.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.lock().await.is_empty()
    }

    pub async fn get(&self, id: &str) -> Result<Post, StoreError> {
        self.posts
            .lock()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Create a post and insert it at the front of the collection.
    pub async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let NewPost {
            title,
            description,
            media,
            tag,
        } = new_post;

        let tag = match tag {
            Some(tag) if !is_blank(&title) && !is_blank(&description) => tag,
            _ => return Err(StoreError::validation(REQUIRED_FIELDS_MESSAGE)),
        };

        let mut guard = self.posts.lock().await;

        let mut post = Post::new(title, description, media.unwrap_or_default(), tag);
        while guard.iter().any(|p| p.id == post.id) {
            tracing::warn!(post_id = %post.id, "Generated id already in use, regenerating");
            post.id = uuid::Uuid::new_v4().to_string();
        }

        let mut next = Vec::with_capacity(guard.len() + 1);
        next.push(post.clone());
        next.extend(guard.iter().cloned());

        self.persist(&mut guard, next).await?;

        tracing::info!(post_id = %post.id, tag = %post.tag, "Post created");
        Ok(post)
    }

    /// Merge `patch` into the post with `id`.
    pub async fn update(&self, id: &str, patch: PostPatch) -> Result<Post, StoreError> {
        if patch.title.as_deref().is_some_and(is_blank) {
            return Err(StoreError::validation("Title cannot be empty"));
        }
        if patch.description.as_deref().is_some_and(is_blank) {
            return Err(StoreError::validation("Description cannot be empty"));
        }

        let mut guard = self.posts.lock().await;

        let index = guard
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        let mut next = guard.clone();
        next[index].apply(patch);
        let updated = next[index].clone();

        self.persist(&mut guard, next).await?;

        tracing::info!(
            post_id = %updated.id,
            pinned = updated.pinned,
            starred = updated.starred,
            "Post updated"
        );
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self.posts.lock().await;

        if !guard.iter().any(|p| p.id == id) {
            return Err(StoreError::not_found(id));
        }

        let next: Vec<Post> = guard.iter().filter(|p| p.id != id).cloned().collect();

        self.persist(&mut guard, next).await?;

        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    async fn persist(
        &self,
        guard: &mut MutexGuard<'_, Vec<Post>>,
        posts: Vec<Post>,
    ) -> Result<(), StoreError> {
        let document = PostDocument::new(posts);

        if let Err(e) = self.backend.save(&document).await {
            tracing::error!(
                backend = %self.backend.describe(),
                error = %e,
                "Failed to persist post document"
            );
            return Err(e.into());
        }

        **guard = document.posts;
        Ok(())
    }
}

// Whitespace-only counts as empty, for create and update alike.
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::Category;
    use crate::error::PersistenceError;

    /// Backend double that keeps the last saved document and can be told to
    /// reject writes.
    #[derive(Default)]
    struct TestBackend {
        document: StdMutex<Option<PostDocument>>,
        fail_writes: AtomicBool,
    }

    impl TestBackend {
        fn saved(&self) -> Option<PostDocument> {
            self.document.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostBackend for TestBackend {
        async fn load(&self) -> Result<Option<PostDocument>, PersistenceError> {
            Ok(self.saved())
        }

        async fn save(&self, document: &PostDocument) -> Result<(), PersistenceError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(PersistenceError::Write("disk full".to_string()));
            }
            *self.document.lock().unwrap() = Some(document.clone());
            Ok(())
        }

        fn describe(&self) -> String {
            "test".to_string()
        }
    }

    fn new_post(title: &str, tag: Category) -> NewPost {
        NewPost {
            title: title.to_string(),
            description: format!("{title} description"),
            media: None,
            tag: Some(tag),
        }
    }

    async fn open() -> (Arc<TestBackend>, PostStore) {
        let backend = Arc::new(TestBackend::default());
        let store = PostStore::open(backend.clone()).await.unwrap();
        (backend, store)
    }

    #[tokio::test]
    async fn test_open_persists_empty_document() {
        let (backend, store) = open().await;
        assert!(store.is_empty().await);
        assert_eq!(backend.saved(), Some(PostDocument::default()));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let (backend, store) = open().await;
        let mut post = new_post("", Category::Product);
        post.title = "   ".to_string();

        let err = store.create(post).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.is_empty().await);
        assert_eq!(backend.saved(), Some(PostDocument::default()));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_tag() {
        let (_, store) = open().await;
        let mut post = new_post("Roadmap", Category::Product);
        post.tag = None;

        let err = store.create(post).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_prepends_and_persists() {
        let (backend, store) = open().await;
        let first = store.create(new_post("First", Category::Team)).await.unwrap();
        let second = store.create(new_post("Second", Category::Team)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.media, "");

        let ids: Vec<_> = store.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second.id.clone(), first.id.clone()]);
        assert_eq!(backend.saved().unwrap().posts.len(), 2);
    }

    #[tokio::test]
    async fn test_update_preserves_identity() {
        let (_, store) = open().await;
        let post = store.create(new_post("Research notes", Category::Research)).await.unwrap();

        let updated = store
            .update(
                &post.id,
                PostPatch {
                    starred: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.starred);
        assert_eq!(updated.id, post.id);
        assert_eq!(updated.created_at, post.created_at);
        assert_eq!(updated.title, post.title);
        assert_eq!(updated.pinned, post.pinned);
        assert_eq!(store.get(&post.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let (_, store) = open().await;
        let err = store.update("missing", PostPatch::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_rejects_blank_title() {
        let (_, store) = open().await;
        let post = store.create(new_post("Title", Category::Team)).await.unwrap();

        let err = store
            .update(
                &post.id,
                PostPatch {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.get(&post.id).await.unwrap().title, "Title");
    }

    #[tokio::test]
    async fn test_delete_unknown_leaves_collection() {
        let (_, store) = open().await;
        store.create(new_post("Keep me", Category::Marketing)).await.unwrap();
        let before = store.list().await;

        let err = store.delete("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.list().await, before);

        let err = store.delete("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_post() {
        let (backend, store) = open().await;
        let post = store.create(new_post("Gone", Category::Team)).await.unwrap();

        store.delete(&post.id).await.unwrap();

        assert!(store.is_empty().await);
        assert!(backend.saved().unwrap().posts.is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_is_not_visible() {
        let (backend, store) = open().await;
        let post = store.create(new_post("Stable", Category::Product)).await.unwrap();
        let before = store.list().await;

        backend.fail_writes.store(true, Ordering::SeqCst);

        let err = store.create(new_post("Lost", Category::Product)).await.unwrap_err();
        assert!(matches!(err, StoreError::Persistence(_)));

        let err = store
            .update(
                &post.id,
                PostPatch {
                    pinned: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Persistence(_)));

        let err = store.delete(&post.id).await.unwrap_err();
        assert!(matches!(err, StoreError::Persistence(_)));

        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_reopen_round_trip() {
        let (backend, store) = open().await;
        store.create(new_post("One", Category::Team)).await.unwrap();
        let two = store.create(new_post("Two", Category::Research)).await.unwrap();
        store
            .update(
                &two.id,
                PostPatch {
                    pinned: Some(true),
                    media: Some("https://example.com/a.png".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let reopened = PostStore::open(backend.clone()).await.unwrap();
        assert_eq!(reopened.list().await, store.list().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_mutations_are_serialized() {
        const WRITERS: usize = 16;

        let (backend, store) = open().await;
        let store = Arc::new(store);
        let target = store.create(new_post("Shared", Category::Team)).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..WRITERS {
            let store = store.clone();
            let target_id = target.id.clone();
            handles.push(tokio::spawn(async move {
                let created = store
                    .create(new_post(&format!("post {i}"), Category::Product))
                    .await
                    .unwrap();
                store
                    .update(
                        &target_id,
                        PostPatch {
                            starred: Some(i % 2 == 0),
                            ..Default::default()
                        },
                    )
                    .await
                    .unwrap();
                created.id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        let posts = store.list().await;
        assert_eq!(posts.len(), WRITERS + 1);
        for id in ids.iter().chain(std::iter::once(&target.id)) {
            assert!(posts.iter().any(|p| &p.id == id), "missing {id}");
        }
        assert_eq!(backend.saved().unwrap().posts, posts);
    }
}
