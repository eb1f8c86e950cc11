//! Help command handler

use teloxide::{Bot, types::Message, prelude::*, utils::command::BotCommands};
use crate::utils::errors::Result;
use super::Command;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, help_text()).await?;
    Ok(())
}

/// Command list shown by /help
pub fn help_text() -> String {
    format!(
        "{}\n\nWhen a member leaves the group I send them a private message asking for feedback.",
        Command::descriptions()
    )
}
