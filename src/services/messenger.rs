//! Direct message delivery
//!
//! The dispatcher only needs to send one private text message, so that is the
//! whole port. `TelegramSender` implements it over the Bot API.

use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};
use tracing::debug;

use crate::utils::errors::{SendError, SendResult};

/// Sends a private text message to a user
#[async_trait]
pub trait DirectMessageSender: Send + Sync {
    async fn send(&self, to_user_id: i64, text: &str) -> SendResult<()>;
}

/// Telegram implementation of [`DirectMessageSender`]
#[derive(Clone)]
pub struct TelegramSender {
    bot: Bot,
}

impl TelegramSender {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl DirectMessageSender for TelegramSender {
    async fn send(&self, to_user_id: i64, text: &str) -> SendResult<()> {
        debug!(user_id = to_user_id, "Sending direct message");

        self.bot
            .send_message(ChatId(to_user_id), text.to_string())
            .await
            .map_err(|e| SendError::from_request(to_user_id, e))?;

        Ok(())
    }
}
