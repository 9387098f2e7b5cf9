//! Route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, user_routes};
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/users", user_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
