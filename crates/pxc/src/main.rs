//! PXC Calculator
//!
//! HTTP service that recommends Percona XtraDB Cluster resource settings.

use std::sync::Arc;

use clap::Parser;
use pxc_core::Catalog;
use pxc_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::{error, info};

/// Starts the Axum HTTP server and runs until a shutdown signal arrives.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    // Built once; every request reads the same snapshot.
    let catalog = Arc::new(Catalog::build());

    info!(
        port = config.port,
        host = %config.host,
        families = catalog.len(),
        dimensions = catalog.dimensions().count(),
        load_types = catalog.load_types().count(),
        "Starting PXC Calculator"
    );

    let app = create_app_with_config(catalog, config.clone());
    serve(app, &config).await
}
