//! Route configuration.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// - `GET|POST /calculator` - Resolve a sizing request
/// - `GET /supported` - Full catalog
/// - `GET /supported/{family}` - One catalog family
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/calculator",
            get(handlers::calculator_handler).post(handlers::calculator_handler),
        )
        .route("/supported", get(handlers::supported_handler))
        .route("/supported/{family}", get(handlers::supported_family_handler))
        .route("/health", get(handlers::health_handler))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler))
        .with_state(state)
}
