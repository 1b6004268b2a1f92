//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{EventDeskError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_auth_config(&settings.auth)?;
    validate_upload_config(&settings.uploads)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(EventDeskError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(EventDeskError::Config(
            format!("API base URL must be http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(EventDeskError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate auth configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if let Some(path) = &config.token_file {
        if path.trim().is_empty() {
            return Err(EventDeskError::Config(
                "Token file path must not be blank".to_string()
            ));
        }
    }

    Ok(())
}

const MAX_UPLOAD_SIZE_MB: u64 = 1024;

/// Validate upload configuration
fn validate_upload_config(config: &super::UploadConfig) -> Result<()> {
    if config.max_file_size_mb == 0 {
        return Err(EventDeskError::Config(
            "Max upload size must be greater than 0".to_string()
        ));
    }

    if config.max_file_size_mb > MAX_UPLOAD_SIZE_MB {
        return Err(EventDeskError::Config(
            format!("Max upload size must be at most {} MB", MAX_UPLOAD_SIZE_MB)
        ));
    }

    if config.allowed_extensions.is_empty() {
        return Err(EventDeskError::Config(
            "At least one allowed upload extension is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventDeskError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventDeskError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
