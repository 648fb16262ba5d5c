//! Configuration for the webhook receiver.
//!
//! Settings are layered with figment from defaults, TOML or YAML files and
//! `ARRHOOK_*` environment variables, then validated.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, Profile, load_config, load_config_from_file};
pub use schema::{
    ArrhookConfig, LogFormat, LogLevel, LogOutput, LogRotation, LoggingConfig, ServerConfig,
    SpanEventConfig, WebhookConfig,
};
pub use validation::validate_config;
