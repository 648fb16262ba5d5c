//! Configuration validation utilities.

use super::error::{ConfigError, ConfigResult};
use super::schema::{ArrhookConfig, LogOutput, LogRotation, LoggingConfig, ServerConfig};

/// Validates the entire configuration.
pub fn validate_config(config: &ArrhookConfig) -> ConfigResult<()> {
    validate_server_config(&config.server)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validates the HTTP listener settings.
fn validate_server_config(server: &ServerConfig) -> ConfigResult<()> {
    if server.host.trim().is_empty() {
        return Err(ConfigError::missing_field("server.host"));
    }

    if server.port == 0 {
        return Err(ConfigError::InvalidPort(server.port));
    }

    if !server.path.starts_with('/') {
        return Err(ConfigError::validation(format!(
            "Webhook path must start with '/': {}",
            server.path
        )));
    }

    Ok(())
}

/// Validates logging settings.
fn validate_logging_config(logging: &LoggingConfig) -> ConfigResult<()> {
    if logging.output == LogOutput::File {
        match &logging.file_path {
            None => return Err(ConfigError::missing_field("logging.file_path")),
            Some(path) if path.file_name().is_none() => {
                return Err(ConfigError::validation(format!(
                    "Log file path has no file name: {}",
                    path.display()
                )));
            }
            Some(_) => {}
        }

        if logging.rotation != LogRotation::Never && logging.max_files == 0 {
            return Err(ConfigError::validation(
                "Rotating log output must keep at least one file",
            ));
        }
    }

    if let Some(target) = logging.filters.keys().find(|t| t.trim().is_empty()) {
        return Err(ConfigError::validation(format!(
            "Log filter target must not be empty: {target:?}"
        )));
    }

    Ok(())
}
