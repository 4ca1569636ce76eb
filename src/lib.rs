pub mod archive;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let max_upload_size = config.max_upload_size;

    let state: SharedState = Arc::new(AppState { pool, config });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_upload_size))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
