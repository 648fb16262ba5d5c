//! Error policy: turns any delivery failure into an HTTP status.

use std::fmt;
use std::sync::Arc;

use tracing::error;

use crate::foundation::WebhookError;
use crate::framework::handler::ErrorHandler;

/// Status returned for a successful delivery.
pub const STATUS_OK: u16 = 200;

/// Status returned for a failed delivery when no error handler is registered.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Decides the outward status of failed deliveries.
///
/// With an error handler registered its return value is used verbatim;
/// without one every failure maps to 400. Logging is independent of the
/// handler: when enabled, each resolved failure emits one `error` event
/// carrying the error and the payload.
#[derive(Clone, Default)]
pub struct ErrorPolicy {
    on_error: Option<ErrorHandler>,
    log_on_error: bool,
}

impl ErrorPolicy {
    /// Creates the default policy: status 400, no logging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the function computing the status for failures.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&[u8]>, &WebhookError) -> u16 + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(f));
        self
    }

    /// Enables or disables logging of failures with their payload.
    pub fn log_on_error(mut self, enabled: bool) -> Self {
        self.log_on_error = enabled;
        self
    }

    /// Returns whether failures are logged.
    pub fn logs_errors(&self) -> bool {
        self.log_on_error
    }

    /// Resolves the status for `error`.
    ///
    /// `payload` is `None` when the body itself could not be read.
    pub fn resolve(&self, payload: Option<&[u8]>, error: &WebhookError) -> u16 {
        let status = match &self.on_error {
            Some(on_error) => on_error(payload, error),
            None => STATUS_BAD_REQUEST,
        };

        if self.log_on_error {
            let payload = payload.map(String::from_utf8_lossy).unwrap_or_default();
            error!(
                error = %error,
                payload = %payload,
                status,
                "Failed to process webhook event"
            );
        }

        status
    }
}

impl fmt::Debug for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorPolicy")
            .field("on_error", &self.on_error.is_some())
            .field("log_on_error", &self.log_on_error)
            .finish()
    }
}
