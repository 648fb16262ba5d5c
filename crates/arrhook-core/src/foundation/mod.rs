//! Foundation layer - event abstractions and error types.
//!
//! This module contains the building blocks shared by every other layer:
//! - Event capability trait and the unknown-event fallback
//! - Discriminant extraction
//! - Error types for a single delivery

pub mod error;
pub mod event;

pub use error::{BoxError, ErrorKind, WebhookError, WebhookResult};
pub use event::{EVENT_TYPE_FIELD, UnknownEvent, WebhookEvent, extract_event_type};
