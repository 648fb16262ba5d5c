//! Webhook HTTP server.
//!
//! One `POST` route per server. The handler reads the body up to the
//! configured limit, runs the dispatcher on tokio's blocking pool and replies
//! with the resulting status and an empty body.

use std::sync::Arc;

use arrhook_core::{BoxError, Dispatcher};
use axum::{
    Router,
    body::{self, Bytes},
    extract::{Request, State},
    http::StatusCode,
    routing::post,
};
use http_body_util::LengthLimitError;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info, trace, warn};

use crate::error::{TransportError, TransportResult};
use crate::listener::ListenerHandle;

/// Route the webhook is served on unless configured otherwise.
pub const DEFAULT_PATH: &str = "/webhook";

/// Default request body limit: 2 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Read failure for a request body longer than the configured limit.
///
/// Error handlers find it as the source of [`WebhookError::ReadBody`].
///
/// [`WebhookError::ReadBody`]: arrhook_core::WebhookError::ReadBody
#[derive(Debug, Error)]
#[error("request body exceeds the {limit} byte limit")]
pub struct BodyLimitExceeded {
    /// The configured limit in bytes.
    pub limit: usize,
}

/// HTTP server delivering webhook POSTs to a dispatcher.
#[derive(Debug, Clone)]
pub struct HttpServer {
    dispatcher: Arc<Dispatcher>,
    path: String,
    max_body_bytes: usize,
}

/// Shared state of the webhook route.
struct WebhookState {
    dispatcher: Arc<Dispatcher>,
    max_body_bytes: usize,
}

impl HttpServer {
    /// Creates a server for `dispatcher` on [`DEFAULT_PATH`].
    pub fn new(dispatcher: impl Into<Arc<Dispatcher>>) -> Self {
        Self {
            dispatcher: dispatcher.into(),
            path: DEFAULT_PATH.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Sets the route path. A missing leading `/` is added.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        self
    }

    /// Sets the request body limit in bytes; `0` disables it.
    ///
    /// Bodies over the limit are read failures and go through the
    /// dispatcher's error policy without a payload.
    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Returns the configured route path.
    pub fn route_path(&self) -> &str {
        &self.path
    }

    /// Builds the axum router serving the webhook route.
    pub fn router(&self) -> Router {
        let state = Arc::new(WebhookState {
            dispatcher: Arc::clone(&self.dispatcher),
            max_body_bytes: self.max_body_bytes,
        });

        Router::new()
            .route(&self.path, post(webhook_handler))
            .with_state(state)
    }

    /// Binds `addr` and serves until the returned handle is stopped.
    pub async fn listen(self, addr: &str) -> TransportResult<ListenerHandle> {
        let router = self.router();

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| TransportError::Bind {
                addr: addr.to_string(),
                source,
            })?;
        let actual_addr = listener.local_addr()?;

        info!(addr = %actual_addr, path = %self.path, "HTTP server listening");

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        // Spawn the server
        let task = tokio::spawn(async move {
            let server = axum::serve(listener, router).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
                info!(addr = %actual_addr, "HTTP server shutting down");
            });

            if let Err(e) = server.await {
                error!(error = %e, "HTTP server error");
            }
        });

        Ok(ListenerHandle::new(
            format!("http-server-{}", actual_addr),
            actual_addr,
            shutdown_tx,
            task,
        ))
    }
}

/// Maps a status computed by the error policy to an HTTP status.
///
/// Values outside `100..=599` become 500.
pub fn response_status(code: u16) -> StatusCode {
    match code {
        100..=599 => StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        _ => {
            warn!(status = code, "Error handler returned an invalid HTTP status");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn read_error(err: axum::Error, limit: usize) -> BoxError {
    let over_limit =
        std::error::Error::source(&err).is_some_and(|source| source.is::<LengthLimitError>());
    if over_limit {
        Box::new(BodyLimitExceeded { limit })
    } else {
        err.into()
    }
}

/// HTTP POST handler.
async fn webhook_handler(State(state): State<Arc<WebhookState>>, request: Request) -> StatusCode {
    let limit = match state.max_body_bytes {
        0 => usize::MAX,
        limit => limit,
    };
    let body: Result<Bytes, BoxError> = body::to_bytes(request.into_body(), limit)
        .await
        .map_err(|err| read_error(err, limit));

    if let Ok(bytes) = &body {
        trace!(len = bytes.len(), "Received webhook POST");
    }

    let dispatcher = Arc::clone(&state.dispatcher);
    let outcome = tokio::task::spawn_blocking(move || match body {
        Ok(bytes) => dispatcher.receive(Ok(&bytes)),
        Err(err) => dispatcher.receive(Err(err)),
    })
    .await;

    match outcome {
        Ok(code) => response_status(code),
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(err) => {
            error!(error = %err, "Webhook dispatch task was cancelled");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
