//! Leave feedback service
//!
//! Decides whether a membership update is a member leaving the watched group
//! and, if so, asks that user for feedback in a private message. Every update
//! is handled on its own: nothing is stored between calls, so a redelivered
//! update produces a second message.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Settings;
use crate::i18n::{I18n, TranslationParams};
use crate::models::MembershipUpdateEvent;
use crate::services::messenger::DirectMessageSender;
use crate::utils::errors::SendError;
use crate::utils::logging;

/// Translation key of the feedback request
pub const FEEDBACK_REQUEST_KEY: &str = "farewell.feedback_request";

/// Why an update did not produce a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    WrongGroup,
    NoRelevantChange,
    NotALeaveEvent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::WrongGroup => write!(f, "wrong_group"),
            SkipReason::NoRelevantChange => write!(f, "no_relevant_change"),
            SkipReason::NotALeaveEvent => write!(f, "not_a_leave_event"),
        }
    }
}

/// Result of handling one membership update
#[derive(Debug)]
pub enum DispatchOutcome {
    Sent,
    Skipped(SkipReason),
    SendFailed(SendError),
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchOutcome::Sent)
    }
}

/// Sends feedback requests to users leaving the target group
#[derive(Clone)]
pub struct LeaveFeedbackService {
    target_group_id: Option<i64>,
    sender: Arc<dyn DirectMessageSender>,
    i18n: Arc<I18n>,
}

impl LeaveFeedbackService {
    /// Create a new LeaveFeedbackService instance
    pub fn new(target_group_id: Option<i64>, sender: Arc<dyn DirectMessageSender>, i18n: Arc<I18n>) -> Self {
        Self {
            target_group_id,
            sender,
            i18n,
        }
    }

    /// Create the service from application settings
    pub fn from_settings(settings: &Settings, sender: Arc<dyn DirectMessageSender>, i18n: Arc<I18n>) -> Self {
        Self::new(settings.bot.target_group_id, sender, i18n)
    }

    /// Build the feedback request for the user in `event`
    pub fn compose_message(&self, event: &MembershipUpdateEvent) -> String {
        let language = self.i18n.detect_user_language(event.user_language_code.as_deref());

        let mut params = TranslationParams::new();
        params.insert("name".to_string(), event.user_display_name.clone());
        params.insert("group".to_string(), event.chat_title.clone());

        self.i18n.t(FEEDBACK_REQUEST_KEY, &language, Some(&params))
    }

    /// Handle one membership update
    pub async fn dispatch(&self, event: &MembershipUpdateEvent) -> DispatchOutcome {
        if let Some(target) = self.target_group_id {
            if event.chat_id != target {
                debug!(chat_id = event.chat_id, target_group_id = target, "Update for another group, ignoring");
                return self.skip(event, SkipReason::WrongGroup);
            }
        }

        let transition = match event.transition() {
            Some(transition) => transition,
            None => return self.skip(event, SkipReason::NoRelevantChange),
        };

        if !transition.is_leave() {
            debug!(
                user_id = event.user_id,
                old_status = ?event.old.status,
                new_status = ?event.new.status,
                was_member = transition.was_member,
                is_member = transition.is_member,
                "Status change is not a leave event"
            );
            return self.skip(event, SkipReason::NotALeaveEvent);
        }

        info!(
            user_id = event.user_id,
            user_name = %event.user_full_name,
            chat_title = %event.chat_title,
            new_status = ?event.new.status,
            "User left the group"
        );

        let message = self.compose_message(event);
        match self.sender.send(event.user_id, &message).await {
            Ok(()) => {
                logging::log_feedback_sent(event.chat_id, event.user_id, &event.user_full_name);
                DispatchOutcome::Sent
            }
            Err(e) => {
                logging::log_feedback_failed(event.chat_id, event.user_id, &event.user_full_name, &e);
                DispatchOutcome::SendFailed(e)
            }
        }
    }

    fn skip(&self, event: &MembershipUpdateEvent, reason: SkipReason) -> DispatchOutcome {
        logging::log_membership_skip(event.chat_id, event.user_id, &reason.to_string());
        DispatchOutcome::Skipped(reason)
    }
}
