//! Error types for the dispatch engine.
//!
//! Every failure of a single webhook delivery is a [`WebhookError`]. None of
//! them is fatal to the process: the [`ErrorPolicy`](crate::ErrorPolicy)
//! turns each one into an HTTP status.

use thiserror::Error;

/// Boxed error used for transport-level read failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while processing one webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The transport could not deliver the request body.
    #[error("failed to read request body: {0}")]
    ReadBody(#[source] BoxError),

    /// The body is not a JSON object with a string `eventType` field.
    #[error("failed to parse event type: {0}")]
    EventType(#[source] serde_json::Error),

    /// The body does not match the shape of its stated event kind.
    #[error("failed to decode '{event}' event: {source}")]
    Decode {
        /// Kind name of the variant that failed to decode.
        event: &'static str,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The body of an unrecognized event kind is not a JSON object.
    #[error("failed to decode unknown '{event_type}' event: {source}")]
    DecodeUnknown {
        /// Discriminant as sent by the upstream service.
        event_type: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Dispatching an event failed; wraps the dispatcher error with the
    /// discriminant that selected the route.
    #[error("failed to handle '{event_type}' event: {source}")]
    Dispatch {
        /// Discriminant read from the payload.
        event_type: String,
        /// The dispatcher error.
        #[source]
        source: Box<WebhookError>,
    },
}

/// Coarse classification of a [`WebhookError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`WebhookError::ReadBody`].
    Read,
    /// See [`WebhookError::EventType`].
    EventType,
    /// See [`WebhookError::Decode`].
    Decode,
    /// See [`WebhookError::DecodeUnknown`].
    DecodeUnknown,
}

impl WebhookError {
    /// Creates a read error from any transport error.
    pub fn read(err: impl Into<BoxError>) -> Self {
        Self::ReadBody(err.into())
    }

    /// Wraps a dispatcher error with the discriminant that selected the route.
    pub fn dispatch(event_type: impl Into<String>, source: WebhookError) -> Self {
        Self::Dispatch {
            event_type: event_type.into(),
            source: Box::new(source),
        }
    }

    /// Returns the error category, looking through [`WebhookError::Dispatch`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ReadBody(_) => ErrorKind::Read,
            Self::EventType(_) => ErrorKind::EventType,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::DecodeUnknown { .. } => ErrorKind::DecodeUnknown,
            Self::Dispatch { source, .. } => source.kind(),
        }
    }

    /// Returns the discriminant this error is associated with, if one was read.
    pub fn event_type(&self) -> Option<&str> {
        match self {
            Self::Decode { event, .. } => Some(event),
            Self::DecodeUnknown { event_type, .. } | Self::Dispatch { event_type, .. } => {
                Some(event_type)
            }
            Self::ReadBody(_) | Self::EventType(_) => None,
        }
    }
}

/// Result type for webhook processing.
pub type WebhookResult<T> = Result<T, WebhookError>;
