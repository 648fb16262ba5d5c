//! Runtime error types.

use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Errors that can occur during runtime operations.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The log subscriber could not be installed.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// The HTTP listener failed.
    #[error(transparent)]
    Transport(#[from] arrhook_transport::TransportError),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
