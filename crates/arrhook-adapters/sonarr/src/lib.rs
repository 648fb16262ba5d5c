//! # Arrhook Adapter for Sonarr
//!
//! Typed Sonarr v3 webhook events and the [`SonarrTriggers`] builder that
//! turns a set of handlers into an arrhook [`Dispatcher`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arrhook_adapter_sonarr::SonarrTriggers;
//! use arrhook_runtime::ArrhookRuntime;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let runtime = ArrhookRuntime::load_config()?;
//!     runtime.init_logging()?;
//!
//!     let dispatcher = SonarrTriggers::new()
//!         .on_download(|event| println!("imported {}", event.episode_file.relative_path))
//!         .on_unknown(|event_type, _| println!("unhandled {event_type}"))
//!         .log_on_error(true)
//!         .build();
//!
//!     runtime.serve(dispatcher).await?;
//!     Ok(())
//! }
//! ```
//!
//! In Sonarr, add a *Webhook* connection pointing at the server (method
//! `POST`) and enable the triggers you handle.
//!
//! ## Events
//!
//! See [`model::event`] for the mapping from `eventType` to event struct.
//! The [`SeriesEvent`] and [`EpisodesEvent`] traits give uniform access to
//! the series and episodes of the kinds that carry them.
//!
//! [`Dispatcher`]: arrhook_core::Dispatcher

pub mod model;
pub mod traits;
pub mod triggers;

pub use triggers::SonarrTriggers;

// Re-export event types
pub use model::event::{
    ApplicationUpdateEvent, DownloadEvent, EpisodeFileDeleteEvent, GrabEvent, HealthEvent,
    RenameEvent, SeriesDeleteEvent, SonarrEventType, TestEvent, UnknownEventType,
};

pub use traits::{EpisodesEvent, SeriesEvent};
