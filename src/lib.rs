pub mod config;
pub mod error;
pub mod evaluation;
pub mod lambda;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::Services;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config, services: Services) -> Router {
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { config, services });

    Router::new()
        .merge(routes::participation_routes())
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
