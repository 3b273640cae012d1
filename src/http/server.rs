//! Listener setup and graceful shutdown.

use super::{router::build_router, state::AppState};
use std::net::SocketAddr;
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::{error, info};

/// Running server. Dropping the handle leaves the server running.
#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// Returns the bound address (useful when binding port 0).
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops accepting connections and waits for in-flight requests.
    pub async fn shutdown(self) {
        if self.shutdown_tx.send(()).is_err() {
            info!("server already stopped");
        }
        if let Err(err) = self.task.await {
            error!(error = %err, "server task ended abnormally");
        }
    }
}

/// Binds `addr` and serves the API in a background task.
///
/// # Errors
///
/// Returns an error when the address cannot be bound.
pub async fn start_server(state: AppState, addr: SocketAddr) -> anyhow::Result<ServerHandle> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;
    info!(addr = %bound_addr, "API listening");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        let outcome = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                if shutdown_rx.await.is_err() {
                    std::future::pending::<()>().await;
                }
                info!("API shutting down");
            })
            .await;
        if let Err(err) = outcome {
            error!(error = %err, "API server error");
        }
    });

    Ok(ServerHandle {
        addr: bound_addr,
        shutdown_tx,
        task,
    })
}
