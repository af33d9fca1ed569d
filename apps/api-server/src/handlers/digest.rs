//! Digest endpoint.

use actix_web::{HttpResponse, web};

use quickboard_core::domain::Category;
use quickboard_core::feed;
use quickboard_shared::dto::DigestQuery;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Comma-separated category names; all categories when absent or blank.
fn parse_categories(raw: Option<&str>) -> AppResult<Vec<Category>> {
    let names: Vec<&str> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if names.is_empty() {
        return Ok(Category::ALL.to_vec());
    }

    names
        .into_iter()
        .map(|name| {
            name.parse::<Category>()
                .map_err(|e| AppError::BadRequest(e.to_string()))
        })
        .collect()
}

/// GET /api/digest?categories=Product,Team
///
/// Three most recent posts per category.
pub async fn get_digest(
    state: web::Data<AppState>,
    query: web::Query<DigestQuery>,
) -> AppResult<HttpResponse> {
    let categories = parse_categories(query.categories.as_deref())?;
    let digest = feed::digest(&state.posts.list().await, &categories);
    Ok(HttpResponse::Ok().json(digest))
}
