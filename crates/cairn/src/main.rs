//! Cairn server
//!
//! Serves the Cairn REST API over an in-memory store.

use cairn_persistence::backends::memory::MemoryBackend;
use cairn_persistence::core::SearchStore;
use cairn_rest::{ServerConfig, create_app_with_config, init_logging};
use clap::Parser;
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
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

    let backend = MemoryBackend::new();

    info!(
        port = config.port,
        host = %config.host,
        default_realm = %config.default_realm,
        storage_backend = backend.backend_name(),
        "Starting Cairn server"
    );

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}
