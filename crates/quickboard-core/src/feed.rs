//! Feed views derived from a snapshot of the store.
//!
//! Everything here is a pure function of the posts it is given; nothing is
//! written back.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::domain::{Category, Post};

/// Number of posts kept per category in a digest.
pub const DIGEST_SIZE: usize = 3;

/// Filters for [`query`]. Both compose with logical AND.
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    pub tag: Option<Category>,
    pub search: Option<String>,
}

impl FeedFilter {
    pub fn matches(&self, post: &Post) -> bool {
        if self.tag.is_some_and(|tag| post.tag != tag) {
            return false;
        }

        // Blank means no search; otherwise the term is matched as given.
        match self.search.as_deref() {
            Some(term) if !term.trim().is_empty() => {
                let term = term.to_lowercase();
                post.title.to_lowercase().contains(&term)
                    || post.description.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }
}

/// Posts matching `filter`, in the order given.
pub fn query(posts: &[Post], filter: &FeedFilter) -> Vec<Post> {
    posts.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// Most recent posts per category, newest first, at most [`DIGEST_SIZE`] each.
///
/// Every requested category is present in the result, empty or not.
pub fn digest(posts: &[Post], categories: &[Category]) -> BTreeMap<Category, Vec<Post>> {
    categories
        .iter()
        .map(|&category| {
            let mut selected: Vec<Post> =
                posts.iter().filter(|p| p.tag == category).cloned().collect();
            selected.sort_by_key(|p| Reverse(p.created_at));
            selected.truncate(DIGEST_SIZE);
            (category, selected)
        })
        .collect()
}

/// Canonical feed order: pinned first, then newest first within each group.
pub fn canonical_order(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by_key(|p| (Reverse(p.pinned), Reverse(p.created_at)));
    posts
}
