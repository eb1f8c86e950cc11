//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::utils::errors::{FarewellError, Result};

/// Environment variables understood by the original deployment, mapped onto settings keys
const PLAIN_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("BOT_TOKEN", "bot.token"),
    ("WEBHOOK_URL", "webhook.url"),
    ("PORT", "webhook.port"),
];

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub webhook: WebhookConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Only membership updates from this chat are processed; all chats when unset
    pub target_group_id: Option<i64>,
}

/// Webhook listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookConfig {
    /// Public base URL; the bot token is appended as the last path segment.
    /// Long polling is used when unset.
    pub url: Option<String>,
    pub port: u16,
    pub secret_token: Option<String>,
    pub drop_pending_updates: bool,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub translations_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("FAREWELL")
                    .prefix_separator("_")
                    .separator("__"),
            );

        for (variable, key) in PLAIN_ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(variable).ok())?;
        }

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        if let Some(raw) = std::env::var("TARGET_GROUP_ID").ok().filter(|v| !v.trim().is_empty()) {
            settings.bot.target_group_id = Some(parse_group_id(&raw)?);
        }

        Ok(settings)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }

    /// Whether updates are received through a webhook rather than long polling
    pub fn uses_webhook(&self) -> bool {
        self.webhook.url.is_some()
    }
}

fn parse_group_id(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        FarewellError::Config(format!("TARGET_GROUP_ID '{}' is not a valid integer", raw))
    })
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                target_group_id: None,
            },
            webhook: WebhookConfig {
                url: None,
                port: 8443,
                secret_token: None,
                drop_pending_updates: false,
            },
            i18n: I18nConfig {
                default_language: "hi".to_string(),
                supported_languages: vec!["hi".to_string(), "en".to_string()],
                translations_dir: "translations".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
        }
    }
}
