//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the FarewellBuddy application.

use std::path::Path;

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, Result, SendError};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for as long as the process logs to the file.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match &config.file_path {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "farewellbuddy.log".to_string());

            let file_appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(stdout_layer)
        .with(file_layer)
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a membership update that did not lead to a message
pub fn log_membership_skip(chat_id: i64, user_id: i64, reason: &str) {
    debug!(
        chat_id = chat_id,
        user_id = user_id,
        reason = reason,
        "Membership update skipped"
    );
}

/// Log a delivered feedback request
pub fn log_feedback_sent(chat_id: i64, user_id: i64, user_name: &str) {
    info!(
        chat_id = chat_id,
        user_id = user_id,
        user_name = user_name,
        "Feedback request sent"
    );
}

/// Log a feedback request that could not be delivered
pub fn log_feedback_failed(chat_id: i64, user_id: i64, user_name: &str, error: &SendError) {
    match error.severity() {
        ErrorSeverity::Warning => warn!(
            chat_id = chat_id,
            user_id = user_id,
            user_name = user_name,
            error = %error,
            "Feedback request not delivered, user blocked the bot or has DMs off"
        ),
        ErrorSeverity::Error => error!(
            chat_id = chat_id,
            user_id = user_id,
            user_name = user_name,
            error = %error,
            "Failed to send feedback request"
        ),
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
