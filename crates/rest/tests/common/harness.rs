//! REST API test harness.

use std::sync::Arc;

use axum_test::TestServer;
use pxc_core::Catalog;
use pxc_rest::{ServerConfig, create_app, create_app_with_config};
use serde_json::{Value, json};

/// Creates a test server over the embedded catalog with test configuration.
pub fn create_test_server() -> TestServer {
    create_test_server_with_config(ServerConfig::for_testing())
}

/// Creates a test server the way an embedding application would, with default settings.
pub fn create_default_server() -> TestServer {
    let app = create_app(Arc::new(Catalog::build()));
    TestServer::new(app).expect("Failed to create test server")
}

/// Creates a test server with the given configuration.
pub fn create_test_server_with_config(config: ServerConfig) -> TestServer {
    let app = create_app_with_config(Arc::new(Catalog::build()), config);
    TestServer::new(app).expect("Failed to create test server")
}

/// Builds a calculation request body.
pub fn sizing_request(dimension: u32, load_type: u32, connections: u32) -> Value {
    json!({
        "dimension": { "id": dimension },
        "loadtype": { "id": load_type },
        "connections": connections
    })
}
