//! Liveness endpoint for hosting platforms.
//!
//! One route, `GET /`, answering with a static string.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Body returned by the liveness route.
pub const STATUS_TEXT: &str = "🛡️ Edit Guardian bot is running!";

/// Router with the single liveness route.
pub fn router() -> Router {
    Router::new().route("/", get(status))
}

async fn status() -> &'static str {
    STATUS_TEXT
}

/// Bind the health server on all interfaces.
pub async fn bind(port: u16) -> anyhow::Result<TcpListener> {
    let address = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(address).await?;
    info!("📡 Health endpoint listening on: {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve the router on its own task for the rest of the process.
pub fn spawn(listener: TcpListener) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router()).await {
            error!("Health endpoint stopped: {}", e);
        }
    })
}
