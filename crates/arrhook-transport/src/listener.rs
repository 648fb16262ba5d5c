//! Handle to a running listener.

use std::net::SocketAddr;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::warn;

/// Handle to a running listener.
///
/// Dropping this handle stops the listener.
#[derive(Debug)]
pub struct ListenerHandle {
    /// Unique identifier for this listener.
    pub id: String,
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ListenerHandle {
    /// Creates a new listener handle.
    pub fn new(
        id: impl Into<String>,
        local_addr: SocketAddr,
        shutdown_tx: oneshot::Sender<()>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            id: id.into(),
            local_addr,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        }
    }

    /// Returns the address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signals the listener to stop without waiting for it.
    pub fn stop(mut self) {
        self.signal();
    }

    /// Stops accepting connections and waits for in-flight requests.
    pub async fn shutdown(mut self) {
        self.signal();
        let Some(task) = self.task.take() else {
            return;
        };
        if let Err(err) = task.await {
            warn!(id = %self.id, error = %err, "Listener task ended abnormally");
        }
    }

    fn signal(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.signal();
    }
}
