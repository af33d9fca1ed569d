//! Post handlers - CRUD plus the filtered feed listings.

use actix_web::{HttpResponse, web};

use quickboard_core::domain::{Category, NewPost, PostPatch};
use quickboard_core::feed::{self, FeedFilter};
use quickboard_shared::dto::{CreatePostRequest, MessageResponse, PostQuery, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Build the feed filter for a query string.
///
/// Empty parameters count as absent. Returns `None` when `tag` names no
/// category, since such a filter can match nothing.
fn feed_filter(query: PostQuery) -> Option<FeedFilter> {
    let tag = match non_empty(query.tag) {
        Some(raw) => Some(raw.parse::<Category>().ok()?),
        None => None,
    };

    Some(FeedFilter {
        tag,
        search: non_empty(query.search),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_tag(raw: &str) -> AppResult<Category> {
    raw.parse::<Category>()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// GET /api/posts?tag=&search=
///
/// Storage order, no sorting.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> AppResult<HttpResponse> {
    let posts = match feed_filter(query.into_inner()) {
        Some(filter) => feed::query(&state.posts.list().await, &filter),
        None => Vec::new(),
    };

    tracing::debug!(count = posts.len(), "Listing posts");
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/feed?tag=&search=
///
/// Same filters as `list_posts`, in canonical feed order.
pub async fn list_feed(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> AppResult<HttpResponse> {
    let posts = match feed_filter(query.into_inner()) {
        Some(filter) => feed::canonical_order(feed::query(&state.posts.list().await, &filter)),
        None => Vec::new(),
    };

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let tag = match non_empty(req.tag) {
        Some(raw) => Some(parse_tag(&raw)?),
        None => None,
    };

    let post = state
        .posts
        .create(NewPost {
            title: req.title.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
            media: req.media,
            tag,
        })
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// PATCH /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let patch = PostPatch {
        title: req.title,
        description: req.description,
        media: req.media,
        tag: req.tag.as_deref().map(parse_tag).transpose()?,
        pinned: req.pinned,
        starred: req.starred,
    };

    let post = state.posts.update(&path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}
