//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{FarewellError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_webhook_config(&settings.webhook)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(FarewellError::Config(
            "Bot token is required".to_string()
        ));
    }

    if config.token.contains('/') || config.token.chars().any(char::is_whitespace) {
        return Err(FarewellError::Config(
            "Bot token must not contain slashes or whitespace".to_string()
        ));
    }

    Ok(())
}

/// Validate webhook configuration
fn validate_webhook_config(config: &super::WebhookConfig) -> Result<()> {
    if let Some(ref raw_url) = config.url {
        let url = Url::parse(raw_url).map_err(|e| {
            FarewellError::Config(format!("Invalid webhook URL '{}': {}", raw_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FarewellError::Config(
                format!("Webhook URL must use http or https, got: {}", url.scheme())
            ));
        }
    }

    if config.port == 0 {
        return Err(FarewellError::Config(
            "Webhook port must be greater than 0".to_string()
        ));
    }

    if let Some(ref secret) = config.secret_token {
        let valid_chars = secret
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if secret.is_empty() || secret.len() > 256 || !valid_chars {
            return Err(FarewellError::Config(
                "Webhook secret token must be 1-256 characters of A-Z, a-z, 0-9, _ and -".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(FarewellError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(FarewellError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(FarewellError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(FarewellError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(FarewellError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
