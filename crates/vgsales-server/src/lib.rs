//! Video game sales dashboard server.
//!
//! Serves the dashboard pages as JSON endpoints over HTTP.
//!
//! # Architecture
//!
//! - **Protocol**: page payload types
//! - **Routes**: one handler per page, each a single render pass that
//!   reloads the dataset from disk and holds no state afterwards
//!
//! The only shared state is the dataset file on disk; see
//! [`vgsales_core::store`] for the (documented, unguarded) upload race.

pub mod error;
pub mod protocol;
pub mod routes;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use vgsales_core::DataPaths;

pub use error::{ServerError, ServerResult};
pub use routes::{AppState, create_router};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Start the dashboard server over a data directory.
pub async fn serve(data_dir: impl AsRef<Path>, config: ServerConfig) -> ServerResult<()> {
    let paths = DataPaths::new(data_dir.as_ref());
    paths.ensure_exists()?;

    let state = Arc::new(AppState { paths });
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|_| ServerError::InvalidAddress(format!("{}:{}", config.host, config.port)))?;

    tracing::info!("Starting dashboard server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Create shutdown signal channel
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    // Handle Ctrl+C for graceful shutdown
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
        }
    });

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.await;
    });

    server.await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
