//! HTTP handlers and route configuration.

mod digest;
mod health;
mod posts;


use actix_web::web;

use crate::middleware::error::{json_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/feed", web::get().to(posts::list_feed))
            .route("/digest", web::get().to(digest::get_digest))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::patch().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
    );
}

/// JSON extractor settings: body limit and `{ "error": ... }` rejections.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}
