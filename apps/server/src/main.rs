//! # Atlas Server
//!
//! HTTP JSON-RPC server for the Atlas SMB client.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tracing init ──► config load ──► database + migrations ──► router    │
//! │        │                                                      │        │
//! │        └── RUST_LOG controls verbosity                        ▼        │
//! │                                             axum::serve on 0.0.0.0    │
//! │                                             until SIGINT/SIGTERM      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use atlas_db::{Database, DbConfig};
use atlas_server::config::ServerConfig;
use atlas_server::{rpc, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Atlas SMB server...");

    // Load configuration
    let config = ServerConfig::load().context("loading configuration")?;
    info!(
        port = config.port,
        database_path = %config.database_path,
        "Configuration loaded"
    );

    // Make sure the database directory exists before SQLite opens the file
    if let Some(parent) = std::path::Path::new(&config.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).context("creating database directory")?;
        }
    }

    // Connect to database (runs migrations)
    let db = Database::new(DbConfig::new(&config.database_path))
        .await
        .context("opening database")?;
    info!("Database ready");

    let app = rpc::router(AppState { db });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "RPC server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves when the process is asked to stop (Ctrl+C, or SIGTERM where
/// that exists); axum then drains in-flight requests before exiting.
async fn shutdown_signal() {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for Ctrl+C");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {},
        _ = sigterm => {},
    }

    info!("Shutdown signal received, draining requests");
}
