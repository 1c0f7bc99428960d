//! Campus events: REST backend for university events, comments, professors,
//! subjects, research and extension projects, and users.

pub mod client;
pub mod config;
pub mod courses;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;
pub mod timestamps;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

pub use client::{ApiClient, ClientError};
pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, common_routes};
pub use seed::seed_demo_data;
pub use state::AppState;
pub use store::{connect, ensure_tables, Backend};

async fn not_found() -> AppError {
    AppError::NotFound("API endpoint not found".into())
}

/// Full application router: operational routes, `/api/*`, JSON 404 fallback,
/// body limit and request tracing. The limit is enforced by the JSON extractor,
/// so an oversized body answers `413 {"error": ...}` like every other failure.
pub fn build_app(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
