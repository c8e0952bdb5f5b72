//! Configuration validator
//!
//! This module provides functionality for validating configuration.

use log::warn;
use tokio::sync::Semaphore;

use crate::config::error::{ConfigError, Result};
use crate::config::types::ClientConfig;

/// Validate the configuration
pub fn validate_config(config: &ClientConfig) -> Result<()> {
    // Validate network settings
    validate_network_settings(config)?;

    // Validate general settings
    validate_general_settings(config);

    Ok(())
}

/// Validate network settings
fn validate_network_settings(config: &ClientConfig) -> Result<()> {
    if config.buffer_size == 0 {
        return Err(ConfigError::InvalidValue(
            "buffer_size".to_string(),
            "Buffer size must be greater than 0".to_string()
        ));
    }

    if config.request_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidValue(
            "request_timeout_secs".to_string(),
            "Request timeout must be greater than 0".to_string()
        ));
    }

    match config.max_concurrency {
        Some(0) => {
            return Err(ConfigError::InvalidValue(
                "max_concurrency".to_string(),
                "Concurrency cap must be greater than 0".to_string()
            ));
        }
        Some(cap) if cap > Semaphore::MAX_PERMITS => {
            return Err(ConfigError::InvalidValue(
                "max_concurrency".to_string(),
                format!("Concurrency cap must not exceed {}", Semaphore::MAX_PERMITS)
            ));
        }
        _ => {}
    }

    Ok(())
}

/// Validate general settings
fn validate_general_settings(config: &ClientConfig) {
    match config.log_level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" => {}
        level => {
            warn!("Unknown log level: {}", level);
        }
    }
}
