//! API module
//!
//! HTTP API endpoints and middleware.

pub mod middleware;
pub mod routes;

pub use routes::create_router;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application: API routes, health check and middleware
pub fn build_app(state: AppState) -> Router {
    // Note: Axum layers are applied in reverse order (last added = first executed)
    // Order: context -> logging -> handler
    let api_routes = create_router()
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(axum::middleware::from_fn(middleware::context_middleware));

    Router::new()
        // Health check (no logging)
        .route("/health", axum::routing::get(health_check))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
