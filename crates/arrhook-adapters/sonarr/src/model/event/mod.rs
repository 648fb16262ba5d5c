//! Sonarr v3 webhook events.
//!
//! Every payload carries its kind in the top-level `eventType` field. Each
//! known kind has a dedicated struct implementing
//! [`WebhookEvent`](arrhook_core::WebhookEvent), whose `EVENT_TYPE` is the
//! value routed to it:
//!
//! ```text
//! eventType            struct                   carries
//! ───────────────────  ───────────────────────  ─────────────────────────────
//! Grab                 GrabEvent                series, episodes, release
//! Download             DownloadEvent            series, episodes, episodeFile
//! Rename               RenameEvent              series, renamedEpisodeFiles
//! EpisodeFileDelete    EpisodeFileDeleteEvent   series, episodes, episodeFile
//! SeriesDelete         SeriesDeleteEvent        series, deletedFiles
//! Health               HealthEvent              level, message, type, wikiUrl
//! ApplicationUpdate    ApplicationUpdateEvent   message, versions
//! Test                 TestEvent                series, episodes
//! ```
//!
//! Any other value is delivered as an
//! [`UnknownEvent`](arrhook_core::UnknownEvent).

pub mod episode;
pub mod series;
pub mod system;

use std::fmt;
use std::str::FromStr;

use arrhook_core::WebhookEvent;

pub use episode::*;
pub use series::*;
pub use system::*;

/// The known Sonarr event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SonarrEventType {
    Grab,
    Download,
    Rename,
    EpisodeFileDelete,
    SeriesDelete,
    Health,
    ApplicationUpdate,
    Test,
}

impl SonarrEventType {
    /// All known kinds.
    pub const ALL: [SonarrEventType; 8] = [
        Self::Grab,
        Self::Download,
        Self::Rename,
        Self::EpisodeFileDelete,
        Self::SeriesDelete,
        Self::Health,
        Self::ApplicationUpdate,
        Self::Test,
    ];

    /// Returns the `eventType` value of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grab => GrabEvent::EVENT_TYPE,
            Self::Download => DownloadEvent::EVENT_TYPE,
            Self::Rename => RenameEvent::EVENT_TYPE,
            Self::EpisodeFileDelete => EpisodeFileDeleteEvent::EVENT_TYPE,
            Self::SeriesDelete => SeriesDeleteEvent::EVENT_TYPE,
            Self::Health => HealthEvent::EVENT_TYPE,
            Self::ApplicationUpdate => ApplicationUpdateEvent::EVENT_TYPE,
            Self::Test => TestEvent::EVENT_TYPE,
        }
    }
}

impl fmt::Display for SonarrEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an `eventType` that is not a known kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Sonarr event type '{0}'")]
pub struct UnknownEventType(pub String);

impl FromStr for SonarrEventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}
