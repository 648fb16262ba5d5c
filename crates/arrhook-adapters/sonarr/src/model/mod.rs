//! Data models for Sonarr v3 webhook payloads.

mod de;
pub mod event;
pub mod file;
pub mod types;

pub use event::*;
pub use file::{
    Actor, EpisodeDetail, EpisodeFileDetail, LanguageProfile, LanguageProfileItem, MediaInfo,
    Quality, QualityModel, QualityProfile, QualityProfileItem, Revision, Season, SeriesDetail,
};
pub use types::{
    Episode, EpisodeFile, Image, Language, LazyLoaded, Ratings, Release, RenamedEpisodeFile,
    Series,
};
