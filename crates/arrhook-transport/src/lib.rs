//! # Arrhook Transport
//!
//! Binds an arrhook [`Dispatcher`](arrhook_core::Dispatcher) to the network.
//!
//! ## Features
//!
//! - `http-server` (default): axum HTTP server accepting webhook POSTs
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  Sonarr             │  POST /webhook  {"eventType": …}
//! ├─────────────────────┤
//! │  arrhook-transport  │  <- This crate (axum, body limit, status mapping)
//! ├─────────────────────┤
//! │  arrhook-core       │  Dispatcher::receive
//! ├─────────────────────┤
//! │  handlers           │
//! └─────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arrhook_transport::http::HttpServer;
//!
//! let handle = HttpServer::new(dispatcher)
//!     .path("/sonarr")
//!     .listen("0.0.0.0:9898")
//!     .await?;
//!
//! tokio::signal::ctrl_c().await?;
//! handle.shutdown().await;
//! ```

mod error;
mod listener;

// Transport implementations (feature-gated)
#[cfg(feature = "http-server")]
pub mod http;

pub use error::{TransportError, TransportResult};
pub use listener::ListenerHandle;

#[cfg(feature = "http-server")]
pub use http::HttpServer;
