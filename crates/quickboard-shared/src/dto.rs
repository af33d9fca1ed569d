//! Data Transfer Objects - request/response types for the API.
//!
//! Tags travel as plain strings so an unknown category can be reported as a
//! validation error instead of a deserialization failure.

use serde::{Deserialize, Serialize};

/// Request to create a post. Every field is optional on the wire; missing
/// required fields are rejected by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub tag: Option<String>,
}

/// Partial update. Clients commonly send the whole post back; `id` and
/// `createdAt` are accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub tag: Option<String>,
    pub pinned: Option<bool>,
    pub starred: Option<bool>,
}

/// `?tag=&search=` query string for feed listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostQuery {
    pub tag: Option<String>,
    pub search: Option<String>,
}

/// `?categories=Product,Team` query string for the digest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigestQuery {
    pub categories: Option<String>,
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub posts: usize,
}
