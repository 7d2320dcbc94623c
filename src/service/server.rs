//! Server lifecycle: bind, serve in the background, shut down gracefully.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::http::router;
use crate::settings::ServiceConfig;
use crate::store::RecipeStore;

/// A recipe server running on a background task.
///
/// Dropping it without calling `shutdown` leaves the task running until
/// the runtime stops.
pub struct RunningServer {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<io::Result<()>>,
}

/// Bind `config.bind_addr` and start serving `store` in the background.
///
/// Returns once the listener is bound, so requests may be sent as soon as
/// this resolves. Port 0 picks a free port; see `RunningServer::local_addr`.
pub async fn run_server<S: RecipeStore + 'static>(
    config: &ServiceConfig,
    store: Arc<S>,
) -> io::Result<RunningServer> {
    let listener = TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = router(store);
    let handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await;
        if let Err(e) = &result {
            error!("recipe server stopped with error: {}", e);
        }
        result
    });

    info!(%local_addr, "recipe service listening");

    Ok(RunningServer {
        local_addr,
        shutdown_tx,
        handle,
    })
}

impl RunningServer {
    /// The address actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// `http://<local_addr>`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections, drain in-flight requests and wait for
    /// the server task to finish.
    pub async fn shutdown(self) -> io::Result<()> {
        info!(local_addr = %self.local_addr, "shutting down recipe service");
        let _ = self.shutdown_tx.send(());
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e)),
        }
    }
}
