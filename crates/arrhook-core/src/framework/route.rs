//! Decode-and-invoke routes.
//!
//! A [`Route`] is one entry of the dispatch table. [`TypedRoute<E>`] decodes
//! the payload into `E` and calls the registered handler, but only when a
//! handler exists: kinds the caller did not subscribe to are accepted without
//! being decoded, so their payload shape never causes a failure.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::foundation::{WebhookError, WebhookEvent, WebhookResult};
use crate::framework::handler::EventHandler;

/// A type-erased entry of the dispatch table.
pub trait Route: Send + Sync {
    /// Kind name this route decodes into.
    fn event_name(&self) -> &'static str;

    /// Returns whether a handler is registered for this route.
    fn is_subscribed(&self) -> bool;

    /// Decodes `payload` and invokes the handler, if any.
    fn invoke(&self, payload: &[u8]) -> WebhookResult<()>;
}

/// A boxed route.
pub type BoxedRoute = Box<dyn Route>;

/// Route for the typed event `E`.
pub struct TypedRoute<E> {
    handler: Option<EventHandler<E>>,
    _marker: PhantomData<fn() -> E>,
}

impl<E> TypedRoute<E>
where
    E: WebhookEvent + DeserializeOwned,
{
    /// Creates a route with no handler.
    pub fn unsubscribed() -> Self {
        Self {
            handler: None,
            _marker: PhantomData,
        }
    }

    /// Creates a route that calls `handler` with the decoded event.
    pub fn new(handler: EventHandler<E>) -> Self {
        Self {
            handler: Some(handler),
            _marker: PhantomData,
        }
    }
}

impl<E> Route for TypedRoute<E>
where
    E: WebhookEvent + DeserializeOwned,
{
    fn event_name(&self) -> &'static str {
        E::EVENT_TYPE
    }

    fn is_subscribed(&self) -> bool {
        self.handler.is_some()
    }

    fn invoke(&self, payload: &[u8]) -> WebhookResult<()> {
        let Some(handler) = &self.handler else {
            trace!(event = E::EVENT_TYPE, "No handler registered, skipping decode");
            return Ok(());
        };

        let event: E = serde_json::from_slice(payload).map_err(|source| WebhookError::Decode {
            event: E::EVENT_TYPE,
            source,
        })?;

        handler(event);
        Ok(())
    }
}

impl<E> fmt::Debug for TypedRoute<E>
where
    E: WebhookEvent,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedRoute")
            .field("event", &E::EVENT_TYPE)
            .field("subscribed", &self.handler.is_some())
            .finish()
    }
}
