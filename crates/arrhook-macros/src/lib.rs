//! Procedural macros for arrhook.
//!
//! This crate provides:
//!
//! - `#[derive(WebhookEvent)]` - Binds an event shape to its `eventType` value
//!
//! # WebhookEvent Derive Macro
//!
//! ```rust,ignore
//! use arrhook_macros::WebhookEvent;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, WebhookEvent)]
//! #[event(name = "Grab")]
//! #[serde(rename_all = "camelCase")]
//! pub struct GrabEvent {
//!     pub event_type: String,
//!     pub download_client: String,
//! }
//!
//! assert_eq!(GrabEvent::EVENT_TYPE, "Grab");
//! ```

mod event;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `arrhook_core::WebhookEvent` for a struct or enum.
///
/// # Attributes
///
/// - `#[event(name = "...")]` - The discriminant value. Defaults to the type
///   name with a trailing `Event` removed (`GrabEvent` becomes `"Grab"`).
/// - `#[event(crate = "...")]` - Path of the core crate, for use through a
///   re-exporting facade (default: `::arrhook_core`).
///
/// # Example
///
/// ```rust,ignore
/// use arrhook_macros::WebhookEvent;
///
/// #[derive(serde::Deserialize, WebhookEvent)]
/// #[event(name = "EpisodeFileDelete", crate = "::arrhook::core")]
/// pub struct EpisodeFileDeleteEvent {
///     pub delete_reason: String,
/// }
/// ```
#[proc_macro_derive(WebhookEvent, attributes(event))]
pub fn derive_webhook_event(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match event::derive_webhook_event(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
