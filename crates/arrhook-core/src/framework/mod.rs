//! Framework layer - routing and failure handling.
//!
//! This module contains the dispatch pipeline:
//! - Handler types stored in the callback table
//! - Decode-and-invoke routes, one per known event kind
//! - The dispatcher mapping discriminants to routes
//! - The error policy resolving failures into HTTP statuses

pub mod dispatcher;
pub mod handler;
pub mod policy;
pub mod route;

pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use handler::{ErrorHandler, EventHandler, UnknownHandler};
pub use policy::{ErrorPolicy, STATUS_BAD_REQUEST, STATUS_OK};
pub use route::{BoxedRoute, Route, TypedRoute};
