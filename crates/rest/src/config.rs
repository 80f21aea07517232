//! Server configuration for the sizing API.
//!
//! This module provides configuration types for the REST server, supporting
//! command line flags, environment variable overrides, and programmatic construction.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PXC_SERVER_PORT` | 8080 | Server port |
//! | `PXC_SERVER_HOST` | 0.0.0.0 | Host to bind |
//! | `PXC_LOG_LEVEL` | info | Log level |
//! | `PXC_MAX_BODY_SIZE` | 65536 | Max request body (bytes) |
//! | `PXC_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `PXC_ENABLE_CORS` | true | Enable CORS |
//! | `PXC_CORS_ORIGINS` | * | Allowed origins |
//! | `PXC_CORS_METHODS` | GET,POST,OPTIONS | Allowed methods |
//! | `PXC_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `PXC_PRETTY_JSON` | true | Indent JSON responses |
//!
//! # Example
//!
//! ```rust
//! use pxc_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     enable_cors: false,
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use clap::Parser;

/// Server configuration for the sizing API.
///
/// This struct can be constructed from command line arguments and environment variables
/// using [`ServerConfig::parse`], or programmatically.
///
/// `--help` and `--version` are handled by clap: both print and exit with code 0.
#[derive(Debug, Clone, Parser)]
#[command(name = "pxc-calculator")]
#[command(version)]
#[command(about = "Sizing calculator for Percona XtraDB Cluster deployments")]
#[command(
    long_about = "Sizing calculator for Percona XtraDB Cluster deployments.\n\n\
                  Serves GET/POST /calculator with a body such as \
                  {\"dimension\":{\"id\":3},\"loadtype\":{\"id\":2},\"connections\":50} \
                  and GET /supported listing every dimension, load type and resource family."
)]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "PXC_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "PXC_SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "PXC_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "PXC_MAX_BODY_SIZE", default_value = "65536")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "PXC_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "PXC_ENABLE_CORS", default_value = "true", action = clap::ArgAction::Set)]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "PXC_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "PXC_CORS_METHODS", default_value = "GET,POST,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "PXC_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Indent JSON responses with two spaces.
    #[arg(long, env = "PXC_PRETTY_JSON", default_value = "true", action = clap::ArgAction::Set)]
    pub pretty_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            max_body_size: 64 * 1024,
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            pretty_json: true,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.host.trim().is_empty() {
            errors.push("Host cannot be empty".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 64 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            pretty_json: false,
        }
    }
}
