//! # arrhook
//!
//! Typed webhook receivers for Sonarr.
//!
//! ## Overview
//!
//! Sonarr posts one JSON document per event to a configured URL. arrhook
//! reads the `eventType` field, decodes the payload into the matching typed
//! event and calls the handler registered for it. Events nobody subscribed
//! to are acknowledged without being decoded, and kinds that are not modelled
//! yet reach an optional catch-all handler as an ordered JSON map.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌────────────┐    ┌────────────────┐
//! │ HTTP POST    │───▶│ ingress          │───▶│ Dispatcher │───▶│ on_grab(...)   │
//! │ (transport)  │    │ read + eventType │    │ by kind    │───▶│ on_download()  │
//! └──────────────┘    └──────────────────┘    └────────────┘───▶│ on_unknown()   │
//!        ▲                     │ failure                          └────────────────┘
//!        │                     ▼
//!        └──────────── ErrorPolicy (status + optional log)
//! ```
//!
//! - **core**: `WebhookEvent`, `Dispatcher`, `ErrorPolicy` and the ingress step
//! - **sonarr**: Sonarr v3 event types and `SonarrTriggers`
//! - **transport**: the axum HTTP endpoint
//! - **runtime**: configuration, logging and `ArrhookRuntime`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arrhook::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let runtime = ArrhookRuntime::load_config()?;
//!     runtime.init_logging()?;
//!
//!     let dispatcher = SonarrTriggers::new()
//!         .on_download(|event| info!(series = %event.series_title(), "Imported"))
//!         .log_on_error(runtime.config().webhook.log_on_error)
//!         .build();
//!
//!     runtime.serve(dispatcher).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `sonarr`: Sonarr adapter (default)
//! - `toml-config`: TOML configuration files (default)
//! - `yaml-config`: YAML configuration files
//! - `json-log`: JSON log output
//!
//! Deriving [`WebhookEvent`](macros::WebhookEvent) through this crate needs
//! `#[event(crate = "arrhook::core")]` unless `arrhook-core` is a direct
//! dependency.

pub use arrhook_core as core;
pub use arrhook_macros as macros;
pub use arrhook_runtime as runtime;
pub use arrhook_transport as transport;

#[cfg(feature = "sonarr")]
pub use arrhook_adapter_sonarr as sonarr;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use arrhook::prelude::*;
/// ```
pub mod prelude {
    // Runtime - main entry point
    pub use arrhook_runtime::{ArrhookConfig, ArrhookRuntime};

    // Dispatch engine
    pub use arrhook_core::{
        Dispatcher, DispatcherBuilder, ErrorKind, ErrorPolicy, UnknownEvent, WebhookError,
        WebhookEvent,
    };
    pub use arrhook_macros::WebhookEvent;

    // Sonarr triggers and event helper traits
    #[cfg(feature = "sonarr")]
    pub use arrhook_adapter_sonarr::{EpisodesEvent, SeriesEvent, SonarrEventType, SonarrTriggers};

    // Logging macros
    pub use arrhook_runtime::prelude::*;
}
