//! arrhook runtime: configuration, logging and serving.
//!
//! This crate provides:
//! - Layered configuration loading (`ConfigLoader`, `ArrhookConfig`)
//! - Logging setup on `tracing-subscriber` (`LoggingBuilder`)
//! - `ArrhookRuntime`, which binds the configured HTTP endpoint for a
//!   dispatcher and runs until Ctrl+C or SIGTERM
//!
//! ```ignore
//! use arrhook_runtime::ArrhookRuntime;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let runtime = ArrhookRuntime::load_config()?;
//!     runtime.init_logging()?;
//!
//!     let dispatcher = arrhook_core::Dispatcher::builder()
//!         .log_on_error(runtime.config().webhook.log_on_error)
//!         .build();
//!     runtime.serve(dispatcher).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;

pub use config::{
    ArrhookConfig, ConfigError, ConfigLoader, ConfigResult, LoggingConfig, ServerConfig,
    WebhookConfig,
};
pub use error::{RuntimeError, RuntimeResult};
pub use logging::{LoggingBuilder, LoggingError, SpanEvents};
pub use runtime::{ArrhookRuntime, RuntimeBuilder};

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// This provides all the commonly used logging macros:
/// - `trace!`, `debug!`, `info!`, `warn!`, `error!`
/// - `span`, `event`
/// - `instrument` attribute
/// - `Level` for span creation
pub mod prelude {
    pub use tracing::{Level, debug, error, event, info, instrument, span, trace, warn};
}
