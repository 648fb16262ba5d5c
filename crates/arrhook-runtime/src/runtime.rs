//! Serving a dispatcher with the loaded configuration.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use arrhook_runtime::ArrhookRuntime;
//!
//! // Loads arrhook.toml from the current directory plus ARRHOOK_* variables
//! let runtime = ArrhookRuntime::load_config()?;
//! runtime.init_logging()?;
//!
//! // Custom configuration path
//! let runtime = ArrhookRuntime::builder()
//!     .config_file("deploy/arrhook.toml")
//!     .build()?;
//!
//! runtime.serve(dispatcher).await?;
//! ```

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use arrhook_core::Dispatcher;
use arrhook_transport::{HttpServer, ListenerHandle};
use tokio::signal;
use tracing::{info, warn};

use crate::config::{ArrhookConfig, ConfigLoader, ConfigResult};
use crate::error::RuntimeResult;
use crate::logging::LoggingBuilder;

/// Serves a webhook dispatcher over HTTP according to an [`ArrhookConfig`].
#[derive(Debug, Clone, Default)]
pub struct ArrhookRuntime {
    config: ArrhookConfig,
}

impl ArrhookRuntime {
    /// Creates a runtime from an already loaded configuration.
    pub fn new(config: ArrhookConfig) -> Self {
        Self { config }
    }

    /// Loads the configuration from the current directory and environment.
    pub fn load_config() -> ConfigResult<Self> {
        Self::builder().build()
    }

    /// Returns a builder for custom configuration sources.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Returns the runtime configuration.
    pub fn config(&self) -> &ArrhookConfig {
        &self.config
    }

    /// Installs the global log subscriber described by `logging`.
    pub fn init_logging(&self) -> RuntimeResult<()> {
        LoggingBuilder::from_config(&self.config.logging).try_init()?;
        Ok(())
    }

    /// Builds the HTTP server for `dispatcher` with the configured path and
    /// body limit.
    pub fn http_server(&self, dispatcher: impl Into<Arc<Dispatcher>>) -> HttpServer {
        HttpServer::new(dispatcher)
            .path(self.config.server.path.clone())
            .max_body_bytes(self.config.server.max_body_bytes)
    }

    /// Binds the configured address and serves in the background.
    pub async fn listen(
        &self,
        dispatcher: impl Into<Arc<Dispatcher>>,
    ) -> RuntimeResult<ListenerHandle> {
        let addr = self.config.server.bind_addr();
        let handle = self.http_server(dispatcher).listen(&addr).await?;
        Ok(handle)
    }

    /// Serves until Ctrl+C or SIGTERM, then shuts down gracefully.
    pub async fn serve(&self, dispatcher: impl Into<Arc<Dispatcher>>) -> RuntimeResult<()> {
        self.serve_until(dispatcher, wait_for_shutdown()).await
    }

    /// Serves until `shutdown` completes, then shuts down gracefully.
    pub async fn serve_until<F>(
        &self,
        dispatcher: impl Into<Arc<Dispatcher>>,
        shutdown: F,
    ) -> RuntimeResult<()>
    where
        F: Future<Output = ()>,
    {
        let handle = self.listen(dispatcher).await?;
        info!(
            addr = %handle.local_addr(),
            path = %self.config.server.path,
            "Webhook receiver is running"
        );

        shutdown.await;

        handle.shutdown().await;
        info!("Webhook receiver stopped");

        Ok(())
    }
}

/// Waits for shutdown signals (Ctrl+C or SIGTERM).
async fn wait_for_shutdown() {
    #[cfg(unix)]
    {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c() => {}
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down");
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to register SIGTERM handler");
                ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    ctrl_c().await;
}

async fn ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}

/// Builder for creating an `ArrhookRuntime` with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// let runtime = ArrhookRuntime::builder()
///     .config_file("config/arrhook.toml")
///     .profile("production")
///     .build()?;
/// ```
pub struct RuntimeBuilder {
    config_loader: ConfigLoader,
}

impl RuntimeBuilder {
    /// Creates a new runtime builder searching the current directory.
    pub fn new() -> Self {
        Self {
            config_loader: ConfigLoader::new().with_current_dir(),
        }
    }

    /// Sets a specific configuration file to load.
    pub fn config_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_loader = self.config_loader.file(path);
        self
    }

    /// Sets the configuration profile (e.g., "development", "production").
    pub fn profile(mut self, profile: impl AsRef<str>) -> Self {
        self.config_loader = self.config_loader.profile(profile);
        self
    }

    /// Adds a search path for configuration files.
    pub fn search_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_loader = self.config_loader.search_path(path);
        self
    }

    /// Enables loading environment variables (enabled by default).
    pub fn with_env(mut self) -> Self {
        self.config_loader = self.config_loader.with_env();
        self
    }

    /// Disables loading environment variables.
    pub fn without_env(mut self) -> Self {
        self.config_loader = self.config_loader.without_env();
        self
    }

    /// Merges additional configuration programmatically.
    pub fn merge(mut self, config: ArrhookConfig) -> Self {
        self.config_loader = self.config_loader.merge(config);
        self
    }

    /// Loads the configuration and builds the runtime.
    pub fn build(self) -> ConfigResult<ArrhookRuntime> {
        let config = self.config_loader.load()?;
        Ok(ArrhookRuntime::new(config))
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
