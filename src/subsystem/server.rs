//! HTTP server subsystem.
//!
//! # Responsibilities
//! - Bind the configured address (fatal on conflict, no retry)
//! - Answer every request with the serving process's id, so a handoff is
//!   observable from outside
//! - Stop accepting on shutdown; in-flight requests complete

use async_trait::async_trait;
use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::SubsystemError;
use crate::lifecycle::Shutdown;
use crate::subsystem::Subsystem;

/// HTTP echo server bound to a fixed, configured port.
pub struct ServerSubsystem {
    bind_address: String,
}

impl ServerSubsystem {
    /// Create a server subsystem from configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            bind_address: config.bind_address.clone(),
        }
    }
}

/// Identifies the serving process in every response.
async fn serve_handler() -> String {
    format!("{} served", std::process::id())
}

#[async_trait]
impl Subsystem for ServerSubsystem {
    fn name(&self) -> &str {
        "server"
    }

    async fn run(&self, shutdown: Shutdown) -> Result<(), SubsystemError> {
        // A bind conflict means the previous port holder has not released it
        // yet; surface it immediately instead of retrying.
        let listener =
            TcpListener::bind(&self.bind_address)
                .await
                .map_err(|source| SubsystemError::Bind {
                    address: self.bind_address.clone(),
                    source,
                })?;
        let local_addr = listener.local_addr()?;

        tracing::info!(
            pid = std::process::id(),
            address = %local_addr,
            "server listening"
        );

        let app = Router::new()
            .route("/", any(serve_handler))
            .route("/{*path}", any(serve_handler))
            .layer(TraceLayer::new_for_http());

        let signal = shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { signal.cancelled().await })
            .await?;

        tracing::info!(pid = std::process::id(), "server stopped");
        Ok(())
    }
}
