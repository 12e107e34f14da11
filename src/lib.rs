//! BLM content service.
//!
//! The site's editable content lives in one document. This crate holds the
//! document model, the pure edits an admin can make to it, the store that
//! keeps a canonical copy apart from the working copy being edited, the
//! gateway that loads and saves it over HTTP, and the backend that serves it.

pub mod api;
pub mod auth;
pub mod config;
pub mod content;
pub mod db;
pub mod errors;
pub mod models;
pub mod sync;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Writes and the aspiration inbox need the PSK; reads and form submissions don't.
    let psk = state.config.api_psk.clone();
    let require_psk =
        middleware::from_fn(move |req, next| auth::require_psk(psk.clone(), req, next));

    let api_routes = Router::new()
        .route(
            "/content",
            get(api::get_content).merge(post(api::write_content).layer(require_psk.clone())),
        )
        .route("/content/revision", get(api::get_revision))
        .route(
            "/aspirations",
            post(api::submit_aspiration).merge(get(api::list_aspirations).layer(require_psk)),
        );

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(state.config.max_body_bytes)),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
