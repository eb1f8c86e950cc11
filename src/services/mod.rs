//! Services module
//!
//! This module contains business logic services

pub mod leave_feedback;
pub mod messenger;

// Re-export commonly used services
pub use leave_feedback::{DispatchOutcome, LeaveFeedbackService, SkipReason, FEEDBACK_REQUEST_KEY};
pub use messenger::{DirectMessageSender, TelegramSender};

use std::sync::Arc;

use teloxide::Bot;

use crate::config::settings::Settings;
use crate::i18n::I18n;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub leave_feedback: LeaveFeedbackService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(bot: Bot, settings: &Settings, i18n: Arc<I18n>) -> Result<Self> {
        i18n.require_key(FEEDBACK_REQUEST_KEY)?;

        let messenger = Arc::new(TelegramSender::new(bot));
        let leave_feedback = LeaveFeedbackService::from_settings(settings, messenger, i18n);

        Ok(Self { leave_feedback })
    }
}
