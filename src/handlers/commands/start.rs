//! Start command handler

use teloxide::{Bot, types::{Message, ParseMode, User}, prelude::*, utils::html};
use tracing::{debug, warn};
use crate::utils::errors::Result;
use crate::i18n::{I18n, TranslationParams};

/// Translation key of the /start greeting
pub const GREETING_KEY: &str = "commands.start.greeting";

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message, i18n: &I18n) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        warn!(chat_id = ?msg.chat.id, "Start command received without a sender");
        return Ok(());
    };

    debug!(user_id = user.id.0, chat_id = ?msg.chat.id, "Processing /start command");

    bot.send_message(msg.chat.id, greeting_text(user, i18n))
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}

/// Localised HTML greeting mentioning `user`
pub fn greeting_text(user: &User, i18n: &I18n) -> String {
    let language = i18n.detect_user_language(user.language_code.as_deref());

    let mut params = TranslationParams::new();
    params.insert("name".to_string(), html::user_mention(user.id, &html::escape(&user.full_name())));

    i18n.t(GREETING_KEY, &language, Some(&params))
}
