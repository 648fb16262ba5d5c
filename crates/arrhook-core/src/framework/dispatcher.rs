//! Variant dispatcher: the callback table of a webhook receiver.
//!
//! The [`Dispatcher`] maps each known discriminant to its [`Route`] and holds
//! the unknown-event handler and the [`ErrorPolicy`]. It is assembled once
//! with a [`DispatcherBuilder`] and is read-only afterwards, so a single
//! instance can be shared behind an `Arc` by any number of concurrent
//! requests.
//!
//! ```rust,ignore
//! use arrhook_core::Dispatcher;
//!
//! let dispatcher = Dispatcher::builder()
//!     .on::<GrabEvent>(|event| println!("grabbed {}", event.release.release_title))
//!     .known::<DownloadEvent>()
//!     .on_unknown(|event_type, _| println!("unhandled {event_type}"))
//!     .log_on_error(true)
//!     .build();
//! ```
//!
//! # Routing Rules
//!
//! - a known discriminant is routed to its entry, subscribed or not;
//! - any other discriminant goes to the unknown-event handler, so new or
//!   renamed upstream kinds degrade to "unknown" instead of failing;
//! - a decode failure of a known kind is an error and never falls back to the
//!   unknown handler.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::foundation::{UnknownEvent, WebhookError, WebhookEvent, WebhookResult};
use crate::framework::handler::UnknownHandler;
use crate::framework::policy::ErrorPolicy;
use crate::framework::route::{BoxedRoute, Route, TypedRoute};

/// The configured callback table.
///
/// # Thread Safety
///
/// `Dispatcher` is `Send + Sync` and exposes no mutating methods; per-request
/// data is always passed in as arguments.
pub struct Dispatcher {
    routes: HashMap<&'static str, BoxedRoute>,
    unknown: Option<UnknownHandler>,
    policy: ErrorPolicy,
}

impl Dispatcher {
    /// Starts building a dispatcher.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Returns the error policy of this dispatcher.
    pub fn policy(&self) -> &ErrorPolicy {
        &self.policy
    }

    /// Returns whether `event_type` is a known discriminant.
    pub fn is_known(&self, event_type: &str) -> bool {
        self.routes.contains_key(event_type)
    }

    /// Returns whether a handler is registered for `event_type`.
    pub fn is_subscribed(&self, event_type: &str) -> bool {
        match self.routes.get(event_type) {
            Some(route) => route.is_subscribed(),
            None => self.unknown.is_some(),
        }
    }

    /// Returns the known discriminants, in no particular order.
    pub fn known_event_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    /// Routes `payload` by its already-extracted discriminant.
    pub fn dispatch(&self, event_type: &str, payload: &[u8]) -> WebhookResult<()> {
        match self.routes.get(event_type) {
            Some(route) => {
                trace!(event = route.event_name(), "Routing known event");
                route.invoke(payload)
            }
            None => self.dispatch_unknown(event_type, payload),
        }
    }

    fn dispatch_unknown(&self, event_type: &str, payload: &[u8]) -> WebhookResult<()> {
        let Some(handler) = &self.unknown else {
            debug!(event_type, "Dropping unknown event, no handler registered");
            return Ok(());
        };

        let event =
            UnknownEvent::from_slice(payload).map_err(|source| WebhookError::DecodeUnknown {
                event_type: event_type.to_string(),
                source,
            })?;

        handler(event_type, event);
        Ok(())
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut known: Vec<_> = self.routes.keys().collect();
        known.sort_unstable();
        f.debug_struct("Dispatcher")
            .field("known", &known)
            .field("unknown", &self.unknown.is_some())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Builder for a [`Dispatcher`].
///
/// Registering the same kind twice keeps the last registration.
#[derive(Default)]
pub struct DispatcherBuilder {
    routes: HashMap<&'static str, BoxedRoute>,
    unknown: Option<UnknownHandler>,
    policy: ErrorPolicy,
}

impl fmt::Debug for DispatcherBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut known: Vec<_> = self.routes.keys().collect();
        known.sort_unstable();
        f.debug_struct("DispatcherBuilder")
            .field("known", &known)
            .field("unknown", &self.unknown.is_some())
            .field("policy", &self.policy)
            .finish()
    }
}

impl DispatcherBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `E` as a known kind without subscribing to it.
    ///
    /// Deliveries of a known kind with no handler succeed without being
    /// decoded and do not reach the unknown-event handler.
    pub fn known<E>(self) -> Self
    where
        E: WebhookEvent + DeserializeOwned,
    {
        self.route(TypedRoute::<E>::unsubscribed())
    }

    /// Registers `handler` for the kind `E`.
    pub fn on<E, F>(self, handler: F) -> Self
    where
        E: WebhookEvent + DeserializeOwned,
        F: Fn(E) + Send + Sync + 'static,
    {
        self.route(TypedRoute::<E>::new(Arc::new(handler)))
    }

    /// Registers a custom route under its own kind name.
    pub fn route<R>(mut self, route: R) -> Self
    where
        R: Route + 'static,
    {
        self.routes.insert(route.event_name(), Box::new(route));
        self
    }

    /// Registers the handler for kinds with no dedicated shape.
    pub fn on_unknown<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, UnknownEvent) + Send + Sync + 'static,
    {
        self.unknown = Some(Arc::new(handler));
        self
    }

    /// Registers the function computing the status of failed deliveries.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&[u8]>, &WebhookError) -> u16 + Send + Sync + 'static,
    {
        self.policy = self.policy.on_error(f);
        self
    }

    /// Enables or disables logging of failures together with their payload.
    pub fn log_on_error(mut self, enabled: bool) -> Self {
        self.policy = self.policy.log_on_error(enabled);
        self
    }

    /// Replaces the whole error policy.
    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Finishes the callback table.
    pub fn build(self) -> Dispatcher {
        Dispatcher {
            routes: self.routes,
            unknown: self.unknown,
            policy: self.policy,
        }
    }
}
