//! Detailed episode file, as sent with `EpisodeFileDelete` events.
//!
//! Sonarr v3 serializes the whole database record of a deleted file,
//! including the parsed quality and media info and, when loaded, the episodes
//! and the full series with its profiles.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::de::null_as_default;
use super::types::{Image, Language, LazyLoaded, Ratings};

/// Deleted episode file record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeFileDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub series_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub season_number: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub relative_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
    #[serde(with = "time::serde::rfc3339::option")]
    pub date_added: Option<OffsetDateTime>,
    pub release_group: Option<String>,
    pub scene_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub quality: QualityModel,
    #[serde(deserialize_with = "null_as_default")]
    pub media_info: MediaInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub episodes: LazyLoaded<Vec<EpisodeDetail>>,
    #[serde(deserialize_with = "null_as_default")]
    pub series: LazyLoaded<SeriesDetail>,
    #[serde(deserialize_with = "null_as_default")]
    pub language: Language,
}

/// Quality with its revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityModel {
    #[serde(deserialize_with = "null_as_default")]
    pub quality: Quality,
    #[serde(deserialize_with = "null_as_default")]
    pub revision: Revision,
}

/// Quality definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quality {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// "television", "web", "bluray", ...
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    /// Vertical resolution in lines.
    #[serde(deserialize_with = "null_as_default")]
    pub resolution: i32,
}

/// Release revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Revision {
    #[serde(deserialize_with = "null_as_default")]
    pub version: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub real: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub is_repack: bool,
}

/// Media info extracted from the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub container_format: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_format: String,
    #[serde(rename = "videoCodecID")]
    #[serde(deserialize_with = "null_as_default")]
    pub video_codec_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_profile: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_codec_library: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_bitrate: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub video_bit_depth: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub video_multi_view_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub video_colour_primaries: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_transfer_characteristics: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_hdr_format: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_hdr_format_compatibility: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_format: String,
    #[serde(rename = "audioCodecID")]
    #[serde(deserialize_with = "null_as_default")]
    pub audio_codec_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_codec_library: String,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_additional_features: String,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_bitrate: i64,
    /// Duration as `HH:MM:SS.fffffff`.
    #[serde(deserialize_with = "null_as_default")]
    pub run_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_stream_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_channels_container: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_channels_stream: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_channel_positions: String,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_channel_positions_text_container: String,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_channel_positions_text_stream: String,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_profile: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_fps: f64,
    /// Slash-separated language list.
    #[serde(deserialize_with = "null_as_default")]
    pub audio_languages: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitles: String,
    #[serde(deserialize_with = "null_as_default")]
    pub scan_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub schema_revision: i32,
}

/// Full episode record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub series_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tvdb_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub episode_file_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub season_number: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub episode_number: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub air_date: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub air_date_utc: Option<OffsetDateTime>,
    pub overview: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub monitored: bool,
    pub absolute_episode_number: Option<i32>,
    pub scene_absolute_episode_number: Option<i32>,
    pub scene_season_number: Option<i32>,
    pub scene_episode_number: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub unverified_scene_numbering: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub ratings: Ratings,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    /// Back-reference to the file; Sonarr never loads it here.
    #[serde(deserialize_with = "null_as_default")]
    pub episode_file: LazyLoaded<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub has_file: bool,
}

/// Full series record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tvdb_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tv_rage_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tv_maze_id: i64,
    pub imdb_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub clean_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sort_title: String,
    /// "continuing", "ended", ...
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub overview: Option<String>,
    pub air_time: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub monitored: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub quality_profile_id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub language_profile_id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub season_folder: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_info_sync: Option<OffsetDateTime>,
    /// Episode runtime in minutes.
    #[serde(deserialize_with = "null_as_default")]
    pub runtime: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(deserialize_with = "null_as_default")]
    pub series_type: String,
    pub network: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub use_scene_numbering: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub title_slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub ratings: Ratings,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub actors: Vec<Actor>,
    pub certification: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub added: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub first_aired: Option<OffsetDateTime>,
    #[serde(deserialize_with = "null_as_default")]
    pub quality_profile: LazyLoaded<QualityProfile>,
    #[serde(deserialize_with = "null_as_default")]
    pub language_profile: LazyLoaded<LanguageProfile>,
    #[serde(deserialize_with = "null_as_default")]
    pub seasons: Vec<Season>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<i64>,
}

/// Cast member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub character: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
}

/// Season monitoring state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Season {
    #[serde(deserialize_with = "null_as_default")]
    pub season_number: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub monitored: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
}

/// Quality profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub upgrade_allowed: bool,
    /// ID of the cutoff quality.
    #[serde(deserialize_with = "null_as_default")]
    pub cutoff: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<QualityProfileItem>,
}

/// Entry of a quality profile: a single quality or a named group of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityProfileItem {
    /// Group ID; absent for single qualities.
    pub id: Option<i32>,
    /// Group name; absent for single qualities.
    pub name: Option<String>,
    pub quality: Option<Quality>,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<QualityProfileItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed: bool,
}

/// Language profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<LanguageProfileItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub upgrade_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cutoff: Language,
}

/// Entry of a language profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageProfileItem {
    #[serde(deserialize_with = "null_as_default")]
    pub language: Language,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed: bool,
}
