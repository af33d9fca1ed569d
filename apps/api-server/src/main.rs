//! # QuickBoard API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting QuickBoard API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config.store).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to open post store");
        std::io::Error::other(e)
    })?;

    let origins = config.cors_allowed_origins.clone();
    let json_body_limit = config.json_body_limit;

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&origins))
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config(json_body_limit))
            .app_data(handlers::query_config())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn build_cors(origins: &[String]) -> Cors {
    let mut cors = Cors::default();
    for origin in origins {
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}
