use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Post entity - a single entry in the team feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub media: String,
    pub tag: Category,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub starred: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new unpinned, unstarred post with a fresh id stamped now.
    pub fn new(title: String, description: String, media: String, tag: Category) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            media,
            tag,
            pinned: false,
            starred: false,
            created_at: Utc::now(),
        }
    }

    /// Merge the provided fields. `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: PostPatch) {
        let PostPatch {
            title,
            description,
            media,
            tag,
            pinned,
            starred,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(media) = media {
            self.media = media;
        }
        if let Some(tag) = tag {
            self.tag = tag;
        }
        if let Some(pinned) = pinned {
            self.pinned = pinned;
        }
        if let Some(starred) = starred {
            self.starred = starred;
        }
    }
}

/// Fields accepted when creating a post.
///
/// Required fields are plain strings here; emptiness is checked by the store
/// so that a missing field and an empty one fail the same way.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub media: Option<String>,
    pub tag: Option<Category>,
}

/// Partial update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub tag: Option<Category>,
    pub pinned: Option<bool>,
    pub starred: Option<bool>,
}
