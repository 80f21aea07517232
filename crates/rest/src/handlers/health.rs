//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and load balancers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::responses::json_response;
use crate::state::AppState;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "pxc-calculator";

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - `{status, service, version, timestamp}`
pub async fn health_handler(State(state): State<AppState>) -> RestResult<Response> {
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    json_response(StatusCode::OK, &health_response, state.pretty_json())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// Ready once the catalog holds at least one family.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
///
/// # Response
///
/// - `200 OK` - Catalog loaded
/// - `503 Service Unavailable` - Catalog is empty
pub async fn readiness_handler(State(state): State<AppState>) -> RestResult<Response> {
    debug!("Processing readiness check request");

    let catalog = state.catalog();
    let (status, ready, check) = if catalog.is_empty() {
        (StatusCode::SERVICE_UNAVAILABLE, "not-ready", "empty")
    } else {
        (StatusCode::OK, "ready", "ok")
    };

    let response = serde_json::json!({
        "status": ready,
        "checks": {
            "catalog": check
        },
        "families": catalog.len()
    });

    json_response(status, &response, state.pretty_json())
}
