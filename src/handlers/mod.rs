//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for /start and /help
//! - Chat member handlers for membership changes in groups

pub mod commands;
pub mod members;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command};
pub use members::handle_chat_member_update;
