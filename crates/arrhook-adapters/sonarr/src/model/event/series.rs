//! Series events.

use arrhook_macros::WebhookEvent;
use serde::{Deserialize, Serialize};

use crate::model::de::null_as_default;
use crate::model::types::Series;

/// A series was removed from Sonarr.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, WebhookEvent)]
#[event(name = "SeriesDelete")]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesDeleteEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub series: Series,
    /// Whether the series folder was deleted along with it.
    #[serde(deserialize_with = "null_as_default")]
    pub deleted_files: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: String,
}
