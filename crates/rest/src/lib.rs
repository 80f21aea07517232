//! # pxc-rest - HTTP API for the PXC Sizing Calculator
//!
//! This crate exposes [`pxc_core`] over HTTP. It resolves sizing requests for
//! Percona XtraDB Cluster deployments and lists the catalog those requests are
//! resolved against.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pxc_core::Catalog;
//! use pxc_rest::{ServerConfig, create_app_with_config};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(Arc::new(Catalog::build()), config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | calculate | GET/POST | `/calculator` |
//! | list catalog | GET | `/supported` |
//! | list family | GET | `/supported/{family}` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//! | readiness | GET | `/_readiness` |
//!
//! ## Error Handling
//!
//! Calculation failures are answered with `200 OK`; the envelope's
//! `request.message.type` is `ERRORPARSE` or `ERROREXEC` and `answer` is `null`.
//! Other failures use [`RestError`]:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 404 | not-found | Unknown catalog family |
//! | 413 | | Body larger than `max_body_size` |
//! | 408 | | Request exceeded `request_timeout` |
//! | 500 | exception | Response could not be serialized |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (catalog, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`responses`] - Envelope and JSON formatting
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use pxc_core::Catalog;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
///
/// # Arguments
///
/// * `catalog` - The catalog snapshot to resolve requests against
pub fn create_app(catalog: Arc<Catalog>) -> Router {
    create_app_with_config(catalog, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up every route together with tracing, timeout, body limit
/// and (optionally) CORS middleware.
///
/// # Arguments
///
/// * `catalog` - The catalog snapshot to resolve requests against
/// * `config` - Server configuration
///
/// # Example
///
/// ```rust
/// use pxc_core::Catalog;
/// use pxc_rest::{create_app_with_config, ServerConfig};
/// use std::sync::Arc;
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(Arc::new(Catalog::build()), config);
/// ```
pub fn create_app_with_config(catalog: Arc<Catalog>, config: ServerConfig) -> Router {
    info!(families = catalog.len(), "Creating sizing API server");

    // Create application state
    let state = AppState::new(catalog, config.clone());

    // Build the router with all routes
    let router = routing::create_routes(state).layer(DefaultBodyLimit::max(config.max_body_size));

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// takes precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "pxc_rest={level},pxc_core={level},pxc_calculator={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
