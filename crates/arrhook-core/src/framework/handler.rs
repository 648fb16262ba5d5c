//! Handler types stored in the callback table.
//!
//! Handlers are plain synchronous closures. They run on the request path and
//! block it until they return; hand work off to a queue or task inside the
//! handler if it is slow.

use std::sync::Arc;

use crate::foundation::{UnknownEvent, WebhookError};

/// Handler for one typed event kind.
pub type EventHandler<E> = Arc<dyn Fn(E) + Send + Sync>;

/// Handler for event kinds without a dedicated shape.
///
/// Receives the discriminant as sent and the decoded mapping.
pub type UnknownHandler = Arc<dyn Fn(&str, UnknownEvent) + Send + Sync>;

/// Computes the HTTP status returned for a failed delivery.
///
/// Receives the raw payload (absent when the body could not be read) and the
/// error.
pub type ErrorHandler = Arc<dyn Fn(Option<&[u8]>, &WebhookError) -> u16 + Send + Sync>;
