//! Application-level events: health checks, updates and connection tests.

use arrhook_macros::WebhookEvent;
use serde::{Deserialize, Serialize};

use crate::model::de::null_as_default;
use crate::model::types::{Episode, Series};

/// A health check failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, WebhookEvent)]
#[event(name = "Health")]
#[serde(default, rename_all = "camelCase")]
pub struct HealthEvent {
    /// "ok", "notice", "warning" or "error".
    #[serde(deserialize_with = "null_as_default")]
    pub level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Name of the failing check, e.g. "IndexerStatusCheck".
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub check_type: String,
    pub wiki_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: String,
}

/// Sonarr was updated to a new version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, WebhookEvent)]
#[event(name = "ApplicationUpdate")]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationUpdateEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub previous_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub new_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: String,
}

/// Test notification sent when the connection is saved or tested.
///
/// The series and episodes are placeholders made up by Sonarr.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, WebhookEvent)]
#[event(name = "Test")]
#[serde(default, rename_all = "camelCase")]
pub struct TestEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub series: Series,
    #[serde(deserialize_with = "null_as_default")]
    pub episodes: Vec<Episode>,
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: String,
}
