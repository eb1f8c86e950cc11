//! Recording direct message sender

use std::sync::Mutex;

use async_trait::async_trait;
use FarewellBuddy::services::DirectMessageSender;
use FarewellBuddy::utils::errors::{SendError, SendResult};

/// What the fake does when asked to send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderBehavior {
    Succeed,
    Blocked,
    Fail,
    Panic,
}

/// Sender that records every call instead of talking to Telegram
pub struct RecordingSender {
    behavior: SenderBehavior,
    sent: Mutex<Vec<(i64, String)>>,
}

impl RecordingSender {
    pub fn new(behavior: SenderBehavior) -> Self {
        Self {
            behavior,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(SenderBehavior::Succeed)
    }

    /// Every `(user_id, text)` the sender was asked to deliver
    pub fn calls(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl DirectMessageSender for RecordingSender {
    async fn send(&self, to_user_id: i64, text: &str) -> SendResult<()> {
        self.sent.lock().unwrap().push((to_user_id, text.to_string()));

        match self.behavior {
            SenderBehavior::Succeed => Ok(()),
            SenderBehavior::Blocked => Err(SendError::Unreachable {
                user_id: to_user_id,
                reason: "Forbidden: bot was blocked by the user".to_string(),
            }),
            SenderBehavior::Fail => Err(SendError::Other("connection reset".to_string())),
            SenderBehavior::Panic => panic!("sender exploded"),
        }
    }
}
