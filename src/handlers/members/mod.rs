//! Chat member update handlers
//!
//! Turns teloxide `ChatMemberUpdated` updates into membership events and hands
//! them to the leave feedback service.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use teloxide::types::ChatMemberUpdated;
use tracing::{debug, error};

use crate::models::MembershipUpdateEvent;
use crate::services::{DispatchOutcome, LeaveFeedbackService};

/// Handle a chat member update from any chat the bot administers.
///
/// Never fails: send errors end up in the outcome and a panic inside the
/// service is logged and swallowed, so the update is always acknowledged.
pub async fn handle_chat_member_update(
    update: ChatMemberUpdated,
    service: Arc<LeaveFeedbackService>,
) -> Option<DispatchOutcome> {
    let event = MembershipUpdateEvent::from(&update);
    debug!(
        chat_id = event.chat_id,
        user_id = event.user_id,
        old_status = ?event.old.status,
        new_status = ?event.new.status,
        "Chat member update received"
    );

    match AssertUnwindSafe(service.dispatch(&event)).catch_unwind().await {
        Ok(outcome) => Some(outcome),
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!(
                chat_id = event.chat_id,
                user_id = event.user_id,
                panic = %message,
                "Panic while handling chat member update"
            );
            None
        }
    }
}
