//! HTTP transport.
//!
//! This module provides the webhook HTTP server.

mod server;

pub use server::{
    BodyLimitExceeded, DEFAULT_MAX_BODY_BYTES, DEFAULT_PATH, HttpServer, response_status,
};
