pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod state;
pub mod upstream;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::handlers::{fixtures_handler, health_handler, metrics_handler, teams_handler};
use crate::state::AppState;

// Build the router. Only GET is routed on the API endpoints, so other
// methods get a 405 from axum's method matching.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/teams", get(teams_handler))
        .route("/api/fixtures", get(fixtures_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}
