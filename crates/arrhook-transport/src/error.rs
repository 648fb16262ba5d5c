//! Transport errors.

use std::io;

use thiserror::Error;

/// Errors that can occur while starting or running a listener.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The requested address.
        addr: String,
        #[source]
        source: io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
