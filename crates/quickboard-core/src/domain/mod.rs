//! Domain entities - the core business objects.

mod category;
mod post;

pub use category::{Category, UnknownCategory};
pub use post::{NewPost, Post, PostPatch};
