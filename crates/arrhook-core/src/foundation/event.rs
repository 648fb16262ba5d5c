//! Event abstractions for webhook payloads.
//!
//! - [`WebhookEvent`] - the capability every typed event shape provides
//! - [`UnknownEvent`] - open key/value fallback for unrecognized kinds
//! - [`extract_event_type`] - shallow decode of the routing field
//!
//! # Routing
//!
//! Every payload carries a top-level `eventType` string. The dispatcher reads
//! it first with a partial decode that ignores everything else, then decodes
//! the full body into whatever shape that value selects.
//!
//! ```text
//! {"eventType":"Grab", "series":{…}, …}
//!        │
//!        └── extract_event_type() ──▶ "Grab" ──▶ GrabEvent
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::error::{WebhookError, WebhookResult};

/// Name of the top-level routing field.
pub const EVENT_TYPE_FIELD: &str = "eventType";

/// A strongly-shaped webhook event that reports its own kind name.
///
/// `EVENT_TYPE` is the discriminant value that routes to this type. Use
/// `#[derive(WebhookEvent)]` from `arrhook-macros` to implement it:
///
/// ```rust,ignore
/// #[derive(Deserialize, WebhookEvent)]
/// #[event(name = "Grab")]
/// pub struct GrabEvent {
///     pub event_type: String,
///     // …
/// }
/// ```
pub trait WebhookEvent: Send + 'static {
    /// Discriminant value carried in `eventType` for this kind.
    const EVENT_TYPE: &'static str;

    /// Returns the kind name of this event, for diagnostics.
    fn event_name(&self) -> &'static str {
        Self::EVENT_TYPE
    }
}

/// An event whose kind has no dedicated shape.
///
/// Upstream services add and rename event kinds over time; such payloads are
/// kept as an insertion-ordered mapping from field name to dynamic value
/// instead of failing the delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnknownEvent(Map<String, Value>);

impl UnknownEvent {
    /// Kind name reported by all unknown events.
    pub const NAME: &'static str = "Unknown";

    /// Creates an unknown event from an already-decoded mapping.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Decodes an unknown event from a raw payload.
    pub fn from_slice(payload: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(payload)
    }

    /// Returns the `eventType` field as sent, if present and a string.
    pub fn event_type(&self) -> Option<&str> {
        self.0.get(EVENT_TYPE_FIELD).and_then(Value::as_str)
    }

    /// Returns the underlying mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the event, returning the underlying mapping.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl WebhookEvent for UnknownEvent {
    const EVENT_TYPE: &'static str = Self::NAME;
}

impl Deref for UnknownEvent {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for UnknownEvent {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Map<String, Value>> for UnknownEvent {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Only the routing field of a payload.
struct Envelope {
    event_type: String,
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EnvelopeVisitor;

        impl<'de> Visitor<'de> for EnvelopeVisitor {
            type Value = Envelope;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object with a string `eventType` field")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Envelope, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut event_type = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key != EVENT_TYPE_FIELD {
                        map.next_value::<IgnoredAny>()?;
                    } else if event_type.is_some() {
                        // Derived event structs reject a repeated field as
                        // well, so routing never picks a handler whose
                        // decode is bound to fail.
                        return Err(de::Error::duplicate_field(EVENT_TYPE_FIELD));
                    } else {
                        event_type = Some(map.next_value::<String>()?);
                    }
                }
                event_type
                    .map(|event_type| Envelope { event_type })
                    .ok_or_else(|| de::Error::missing_field(EVENT_TYPE_FIELD))
            }
        }

        deserializer.deserialize_map(EnvelopeVisitor)
    }
}

/// Reads the `eventType` discriminant from a raw payload.
///
/// All other fields are ignored. Fails if the payload is not a JSON object or
/// if `eventType` is missing or not a string.
pub fn extract_event_type(payload: &[u8]) -> WebhookResult<String> {
    serde_json::from_slice::<Envelope>(payload)
        .map(|envelope| envelope.event_type)
        .map_err(WebhookError::EventType)
}
