//! HTTP request handlers.
//!
//! - [`calculator`] - Resolve a sizing request
//! - [`supported`] - List the catalog
//! - [`health`] - Health, liveness and readiness probes

pub mod calculator;
pub mod health;
pub mod supported;

// Re-export handlers for convenience
pub use calculator::calculator_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use supported::{supported_family_handler, supported_handler};
