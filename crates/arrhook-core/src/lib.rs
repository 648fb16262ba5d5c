//! # Arrhook Core
//!
//! The event dispatch engine behind arrhook webhook receivers.
//!
//! A media-management service posts JSON notifications whose top-level
//! `eventType` field names the kind of event. This crate reads that field,
//! decodes the body into the matching typed event, and calls the handler the
//! application registered for it. Kinds it does not know are handed to a
//! generic handler as an open mapping instead of failing, and every failure
//! goes through one configurable error policy that picks the HTTP status.
//!
//! ## Architecture Layers
//!
//! ### Foundation Layer
//!
//! - **Events**: the [`WebhookEvent`] capability and the [`UnknownEvent`] fallback
//! - **Discriminant**: [`extract_event_type`] reads only the routing field
//! - **Errors**: [`WebhookError`] for every failure of a single delivery
//!
//! ### Framework Layer
//!
//! - **Routes**: [`TypedRoute`] decodes and invokes one event kind
//! - **Dispatcher**: [`Dispatcher`], the read-only callback table
//! - **Error Policy**: [`ErrorPolicy`] maps failures to statuses and logs them
//!
//! ### Ingress
//!
//! [`Dispatcher::receive`] runs one delivery end to end:
//!
//! ```text
//! ┌──────────┐     ┌────────────────────┐     ┌────────────┐     ┌──────────────┐
//! │   body   │────▶│ extract_event_type │────▶│ Dispatcher │────▶│ TypedRoute<E>│──▶ handler
//! └──────────┘     └────────────────────┘     └────────────┘──┐  └──────────────┘
//!                                                             └─▶ unknown handler
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use arrhook_core::{Dispatcher, WebhookEvent};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct TestEvent {}
//!
//! impl WebhookEvent for TestEvent {
//!     const EVENT_TYPE: &'static str = "Test";
//! }
//!
//! let dispatcher = Dispatcher::builder()
//!     .on(|event: TestEvent| println!("received {}", event.event_name()))
//!     .on_unknown(|event_type, fields| println!("{event_type}: {fields:?}"))
//!     .build();
//!
//! assert_eq!(dispatcher.receive(Ok(br#"{"eventType":"Test"}"#)), 200);
//! ```

// Architectural layers
pub mod foundation;
pub mod framework;
pub mod ingress;

// Re-export foundation types
pub use foundation::{
    BoxError, EVENT_TYPE_FIELD, ErrorKind, UnknownEvent, WebhookError, WebhookEvent,
    WebhookResult, extract_event_type,
};

// Re-export framework types
pub use framework::{
    BoxedRoute, Dispatcher, DispatcherBuilder, ErrorHandler, ErrorPolicy, EventHandler, Route,
    STATUS_BAD_REQUEST, STATUS_OK, TypedRoute, UnknownHandler,
};

pub use ingress::DispatchOutcome;

/// Prelude for common imports.
pub mod prelude {
    pub use super::foundation::*;
    pub use super::framework::{Dispatcher, DispatcherBuilder, ErrorPolicy};
    pub use super::ingress::DispatchOutcome;
}
