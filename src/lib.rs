//! FarewellBuddy Telegram Bot
//!
//! A Telegram bot that watches membership changes in a group and privately
//! asks members who leave why they left. This library provides the membership
//! transition classifier, the leave feedback service and the bot glue around
//! them: commands, webhook listener, configuration and logging.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod i18n;
pub mod utils;
pub mod webhook;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{FarewellError, Result};

// Re-export main components for easy access
pub use services::{ServiceFactory, LeaveFeedbackService, DispatchOutcome, SkipReason};
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
