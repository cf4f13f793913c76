//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API surface is a single relay endpoint plus a health check. Every
//! other path is served from the static site root, which holds the built
//! client bundle.

pub mod predict;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes without the static fallback.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/predict", post(predict::predict))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes, static site fallback, tracing.
pub fn app(state: AppState, site_root: &Path) -> Router {
    let site = ServeDir::new(site_root).append_index_html_on_directories(true);
    api_routes(state)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
