//! Common Sonarr webhook types.
//!
//! These are the summaries Sonarr embeds in most of its webhook payloads:
//! the series, the episodes concerned, the release that was grabbed and the
//! files that were imported or renamed.
//!
//! Every struct decodes leniently: a field that is missing or `null` takes its
//! default value. `Option` marks fields whose absence callers may care about.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::de::null_as_default;

/// Series summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Series {
    /// Sonarr series ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Root folder of the series on disk.
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tvdb_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tv_maze_id: i64,
    pub imdb_id: Option<String>,
    /// Series type ("standard", "daily", "anime").
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub series_type: String,
}

/// Episode summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Episode {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub episode_number: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub season_number: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Local air date, `YYYY-MM-DD`.
    pub air_date: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub air_date_utc: Option<OffsetDateTime>,
}

/// Release that was sent to a download client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Release {
    /// Quality name, e.g. "WEBDL-1080p".
    #[serde(deserialize_with = "null_as_default")]
    pub quality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quality_version: i32,
    pub release_group: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub release_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub indexer: String,
    /// Size in bytes.
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
}

/// Episode file that was imported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeFile {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Path relative to the series folder.
    #[serde(deserialize_with = "null_as_default")]
    pub relative_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quality_version: i32,
    pub release_group: Option<String>,
    pub scene_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
}

/// Episode file after a rename, with its previous location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenamedEpisodeFile {
    #[serde(deserialize_with = "null_as_default")]
    pub previous_relative_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub previous_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub relative_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quality_version: i32,
    pub release_group: Option<String>,
    pub scene_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
}

/// Artwork reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    /// "poster", "banner", "fanart", "screenshot", ...
    #[serde(deserialize_with = "null_as_default")]
    pub cover_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Community rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ratings {
    #[serde(deserialize_with = "null_as_default")]
    pub votes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
}

/// Audio language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Sonarr's lazily-loaded relation wrapper.
///
/// Sonarr serializes database relations as `{"value": ..., "isLoaded": bool}`;
/// `value` is only meaningful when `is_loaded` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LazyLoaded<T> {
    pub value: Option<T>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_loaded: bool,
}

impl<T> LazyLoaded<T> {
    /// Returns the related value if Sonarr loaded it.
    pub fn get(&self) -> Option<&T> {
        if self.is_loaded {
            self.value.as_ref()
        } else {
            None
        }
    }
}

impl<T> Default for LazyLoaded<T> {
    fn default() -> Self {
        Self {
            value: None,
            is_loaded: false,
        }
    }
}
