//! Sonarr connection triggers.
//!
//! [`SonarrTriggers`] is the callback table for a Sonarr webhook connection:
//! one optional handler per connection trigger, a handler for event kinds
//! this crate does not model yet, and the error policy. All eight Sonarr
//! kinds are always known, so a kind without a handler is accepted and
//! dropped instead of reaching the unknown handler.
//!
//! ```rust,ignore
//! use arrhook_adapter_sonarr::SonarrTriggers;
//!
//! let dispatcher = SonarrTriggers::new()
//!     .on_grab(|event| println!("grabbed {}", event.release.release_title))
//!     .on_download(|event| println!("imported, upgrade: {}", event.is_upgrade))
//!     .on_error(|_, _| 422)
//!     .log_on_error(true)
//!     .build();
//! ```

use arrhook_core::{Dispatcher, DispatcherBuilder, ErrorPolicy, UnknownEvent, WebhookError};

use crate::model::{
    ApplicationUpdateEvent, DownloadEvent, EpisodeFileDeleteEvent, GrabEvent, HealthEvent,
    RenameEvent, SeriesDeleteEvent, TestEvent,
};

/// Builder for a Sonarr webhook dispatcher.
#[derive(Debug)]
pub struct SonarrTriggers {
    builder: DispatcherBuilder,
}

impl Default for SonarrTriggers {
    fn default() -> Self {
        Self::new()
    }
}

impl SonarrTriggers {
    /// Creates triggers with every Sonarr kind known and no handlers.
    pub fn new() -> Self {
        let builder = Dispatcher::builder()
            .known::<GrabEvent>()
            .known::<DownloadEvent>()
            .known::<RenameEvent>()
            .known::<EpisodeFileDeleteEvent>()
            .known::<SeriesDeleteEvent>()
            .known::<HealthEvent>()
            .known::<ApplicationUpdateEvent>()
            .known::<TestEvent>();
        Self { builder }
    }

    /// Episodes were sent to a download client.
    pub fn on_grab<F>(mut self, handler: F) -> Self
    where
        F: Fn(GrabEvent) + Send + Sync + 'static,
    {
        self.builder = self.builder.on::<GrabEvent, F>(handler);
        self
    }

    /// Episodes were imported (the "On Import" and "On Upgrade" triggers).
    pub fn on_download<F>(mut self, handler: F) -> Self
    where
        F: Fn(DownloadEvent) + Send + Sync + 'static,
    {
        self.builder = self.builder.on::<DownloadEvent, F>(handler);
        self
    }

    /// Episode files were renamed.
    pub fn on_rename<F>(mut self, handler: F) -> Self
    where
        F: Fn(RenameEvent) + Send + Sync + 'static,
    {
        self.builder = self.builder.on::<RenameEvent, F>(handler);
        self
    }

    /// An episode file was deleted.
    pub fn on_episode_file_delete<F>(mut self, handler: F) -> Self
    where
        F: Fn(EpisodeFileDeleteEvent) + Send + Sync + 'static,
    {
        self.builder = self.builder.on::<EpisodeFileDeleteEvent, F>(handler);
        self
    }

    /// A series was deleted.
    pub fn on_series_delete<F>(mut self, handler: F) -> Self
    where
        F: Fn(SeriesDeleteEvent) + Send + Sync + 'static,
    {
        self.builder = self.builder.on::<SeriesDeleteEvent, F>(handler);
        self
    }

    /// A health check failed.
    pub fn on_health<F>(mut self, handler: F) -> Self
    where
        F: Fn(HealthEvent) + Send + Sync + 'static,
    {
        self.builder = self.builder.on::<HealthEvent, F>(handler);
        self
    }

    /// Sonarr was updated.
    pub fn on_application_update<F>(mut self, handler: F) -> Self
    where
        F: Fn(ApplicationUpdateEvent) + Send + Sync + 'static,
    {
        self.builder = self.builder.on::<ApplicationUpdateEvent, F>(handler);
        self
    }

    /// The connection was tested from the Sonarr UI.
    pub fn on_test<F>(mut self, handler: F) -> Self
    where
        F: Fn(TestEvent) + Send + Sync + 'static,
    {
        self.builder = self.builder.on::<TestEvent, F>(handler);
        self
    }

    /// Any event kind not listed above.
    pub fn on_unknown<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, UnknownEvent) + Send + Sync + 'static,
    {
        self.builder = self.builder.on_unknown(handler);
        self
    }

    /// Computes the status returned to Sonarr for failed deliveries.
    ///
    /// The payload is `None` when the request body could not be read.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&[u8]>, &WebhookError) -> u16 + Send + Sync + 'static,
    {
        self.builder = self.builder.on_error(f);
        self
    }

    /// Logs every failure together with the received payload.
    pub fn log_on_error(mut self, enabled: bool) -> Self {
        self.builder = self.builder.log_on_error(enabled);
        self
    }

    /// Replaces the whole error policy.
    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.builder = self.builder.policy(policy);
        self
    }

    /// Finishes the triggers into a dispatcher.
    pub fn build(self) -> Dispatcher {
        self.builder.build()
    }
}
