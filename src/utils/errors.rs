//! Error handling for FarewellBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use teloxide::{ApiError, RequestError};
use thiserror::Error;

/// Main error type for FarewellBuddy application
#[derive(Error, Debug)]
pub enum FarewellError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Failure of a single outbound direct message
#[derive(Error, Debug)]
pub enum SendError {
    /// The platform refused to deliver to this user and will keep refusing
    #[error("User {user_id} cannot be messaged: {reason}")]
    Unreachable { user_id: i64, reason: String },

    #[error("Telegram API error: {0}")]
    Telegram(#[from] RequestError),

    #[error("Send failed: {0}")]
    Other(String),
}

/// Result type alias for FarewellBuddy operations
pub type Result<T> = std::result::Result<T, FarewellError>;

/// Result type alias for direct message sends
pub type SendResult<T> = std::result::Result<T, SendError>;

impl SendError {
    /// Classify a Bot API error for a message addressed to `user_id`
    pub fn from_request(user_id: i64, error: RequestError) -> Self {
        match error {
            RequestError::Api(
                api @ (ApiError::BotBlocked
                | ApiError::UserDeactivated
                | ApiError::CantInitiateConversation
                | ApiError::ChatNotFound),
            ) => SendError::Unreachable {
                user_id,
                reason: api.to_string(),
            },
            other => SendError::Telegram(other),
        }
    }

    /// Whether retrying the same message could ever succeed
    pub fn is_permanent(&self) -> bool {
        matches!(self, SendError::Unreachable { .. })
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        if self.is_permanent() {
            ErrorSeverity::Warning
        } else {
            ErrorSeverity::Error
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
        }
    }
}
