//! Command handlers module
//!
//! This module contains handlers for the bot commands /start and /help.

pub mod start;
pub mod help;

use std::sync::Arc;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::i18n::I18n;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "FarewellBuddy commands:")]
pub enum Command {
    #[command(description = "Start the bot and show a greeting")]
    Start,
    #[command(description = "Show help information")]
    Help,
}

/// Main command dispatcher
pub async fn handle_command(bot: Bot, msg: Message, cmd: Command, i18n: Arc<I18n>) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, &i18n).await,
        Command::Help => help::handle_help(bot, msg).await,
    }
}
