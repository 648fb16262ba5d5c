//! Sonarr-specific event traits.
//!
//! Most event kinds describe something that happened to a series, and many
//! of them to specific episodes. These traits let handlers shared between
//! kinds reach that data without matching on the concrete type.

use crate::model::{
    DownloadEvent, Episode, EpisodeFileDeleteEvent, GrabEvent, RenameEvent, Series,
    SeriesDeleteEvent, TestEvent,
};

/// An event concerning a single series.
pub trait SeriesEvent: Send + Sync {
    /// Returns the series the event is about.
    fn series(&self) -> &Series;

    /// Returns the series title.
    fn series_title(&self) -> &str {
        &self.series().title
    }
}

/// An event concerning specific episodes.
pub trait EpisodesEvent: SeriesEvent {
    /// Returns the episodes the event is about.
    fn episodes(&self) -> &[Episode];

    /// Formats the episodes as `S01E02` codes, joined by spaces.
    fn episode_codes(&self) -> String {
        self.episodes()
            .iter()
            .map(|e| format!("S{:02}E{:02}", e.season_number, e.episode_number))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

macro_rules! impl_series_event {
    ($($ty:ty),* $(,)?) => {
        $(impl SeriesEvent for $ty {
            fn series(&self) -> &Series {
                &self.series
            }
        })*
    };
}

macro_rules! impl_episodes_event {
    ($($ty:ty),* $(,)?) => {
        $(impl EpisodesEvent for $ty {
            fn episodes(&self) -> &[Episode] {
                &self.episodes
            }
        })*
    };
}

impl_series_event!(
    GrabEvent,
    DownloadEvent,
    RenameEvent,
    EpisodeFileDeleteEvent,
    SeriesDeleteEvent,
    TestEvent,
);

impl_episodes_event!(GrabEvent, DownloadEvent, EpisodeFileDeleteEvent, TestEvent);
