//! Route configuration for the sizing API.
//!
//! This module maps HTTP paths to handlers.

pub mod routes;

pub use routes::create_routes;
