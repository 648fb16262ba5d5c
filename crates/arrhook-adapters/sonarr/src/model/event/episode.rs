//! Episode lifecycle events: grab, import, rename and file deletion.

use arrhook_macros::WebhookEvent;
use serde::{Deserialize, Serialize};

use crate::model::de::null_as_default;
use crate::model::file::EpisodeFileDetail;
use crate::model::types::{Episode, EpisodeFile, Release, RenamedEpisodeFile, Series};

/// Episodes were found and sent to a download client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, WebhookEvent)]
#[event(name = "Grab")]
#[serde(default, rename_all = "camelCase")]
pub struct GrabEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub series: Series,
    #[serde(deserialize_with = "null_as_default")]
    pub episodes: Vec<Episode>,
    #[serde(deserialize_with = "null_as_default")]
    pub release: Release,
    /// Name of the download client the release was sent to.
    #[serde(deserialize_with = "null_as_default")]
    pub download_client: String,
    /// Implementation of that client, e.g. "SABnzbd" or "qBittorrent".
    #[serde(deserialize_with = "null_as_default")]
    pub download_client_type: String,
    /// Download ID assigned by the client (the torrent hash for torrents).
    pub download_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: String,
}

/// Episodes were imported, or an existing file was upgraded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, WebhookEvent)]
#[event(name = "Download")]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub series: Series,
    #[serde(deserialize_with = "null_as_default")]
    pub episodes: Vec<Episode>,
    #[serde(deserialize_with = "null_as_default")]
    pub episode_file: EpisodeFile,
    /// Whether the import replaced an existing file.
    #[serde(deserialize_with = "null_as_default")]
    pub is_upgrade: bool,
    pub download_client: Option<String>,
    pub download_client_type: Option<String>,
    pub download_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: String,
}

/// Episode files of a series were renamed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, WebhookEvent)]
#[event(name = "Rename")]
#[serde(default, rename_all = "camelCase")]
pub struct RenameEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub series: Series,
    #[serde(deserialize_with = "null_as_default")]
    pub renamed_episode_files: Vec<RenamedEpisodeFile>,
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: String,
}

/// An episode file was deleted from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, WebhookEvent)]
#[event(name = "EpisodeFileDelete")]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeFileDeleteEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub series: Series,
    #[serde(deserialize_with = "null_as_default")]
    pub episodes: Vec<Episode>,
    #[serde(deserialize_with = "null_as_default")]
    pub episode_file: EpisodeFileDetail,
    /// "manual", "missingFromDisk" or "upgrade".
    #[serde(deserialize_with = "null_as_default")]
    pub delete_reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: String,
}
