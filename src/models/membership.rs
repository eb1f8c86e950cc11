//! Chat membership model and transition classifier

use serde::{Deserialize, Serialize};
use teloxide::types::{ChatMember, ChatMemberKind, ChatMemberUpdated};

/// A user's relationship to a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Member,
    Administrator,
    Owner,
    Left,
    Kicked,
    Restricted,
}

impl MembershipStatus {
    /// Statuses that make a user part of the chat on their own
    pub fn is_present(self) -> bool {
        matches!(
            self,
            MembershipStatus::Member | MembershipStatus::Administrator | MembershipStatus::Owner
        )
    }
}

/// Membership of one user at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipSnapshot {
    pub status: MembershipStatus,
    /// Only reported for some statuses (restricted users)
    pub is_member: Option<bool>,
}

impl MembershipSnapshot {
    pub fn new(status: MembershipStatus) -> Self {
        Self { status, is_member: None }
    }

    pub fn with_is_member(status: MembershipStatus, is_member: bool) -> Self {
        Self { status, is_member: Some(is_member) }
    }

    /// Whether the user belongs to the chat in this snapshot
    pub fn is_membership(&self) -> bool {
        self.status.is_present() || self.is_member == Some(true)
    }
}

impl From<&ChatMember> for MembershipSnapshot {
    fn from(member: &ChatMember) -> Self {
        match &member.kind {
            ChatMemberKind::Owner(_) => Self::new(MembershipStatus::Owner),
            ChatMemberKind::Administrator(_) => Self::new(MembershipStatus::Administrator),
            ChatMemberKind::Member { .. } => Self::new(MembershipStatus::Member),
            ChatMemberKind::Restricted(restricted) => {
                Self::with_is_member(MembershipStatus::Restricted, restricted.is_member)
            }
            ChatMemberKind::Left { .. } => Self::new(MembershipStatus::Left),
            ChatMemberKind::Banned(_) => Self::new(MembershipStatus::Kicked),
        }
    }
}

/// Membership before and after one update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipTransition {
    pub was_member: bool,
    pub is_member: bool,
}

impl MembershipTransition {
    /// The user was in the chat and no longer is
    pub fn is_leave(&self) -> bool {
        self.was_member && !self.is_member
    }

    /// The user was outside the chat and now is in it
    pub fn is_join(&self) -> bool {
        !self.was_member && self.is_member
    }
}

/// Classify an old/new snapshot pair.
///
/// Returns `None` when the pair carries no membership transition: the status
/// did not change, the `is_member` flag was not dropped, and the user is
/// outside the chat on both sides.
pub fn classify(old: &MembershipSnapshot, new: &MembershipSnapshot) -> Option<MembershipTransition> {
    if old.status == new.status {
        if old.is_member == Some(true) && new.is_member == Some(false) {
            return Some(MembershipTransition { was_member: true, is_member: false });
        }

        if !old.is_membership() && !new.is_membership() {
            return None;
        }
    }

    Some(MembershipTransition {
        was_member: old.is_membership(),
        is_member: new.is_membership(),
    })
}

/// A membership change reported for one user in one chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipUpdateEvent {
    pub chat_id: i64,
    pub chat_title: String,
    pub user_id: i64,
    /// First name, used to greet the user
    pub user_display_name: String,
    pub user_full_name: String,
    pub user_language_code: Option<String>,
    pub old: MembershipSnapshot,
    pub new: MembershipSnapshot,
}

impl MembershipUpdateEvent {
    pub fn transition(&self) -> Option<MembershipTransition> {
        classify(&self.old, &self.new)
    }
}

impl From<&ChatMemberUpdated> for MembershipUpdateEvent {
    fn from(update: &ChatMemberUpdated) -> Self {
        let user = &update.new_chat_member.user;

        Self {
            chat_id: update.chat.id.0,
            chat_title: update.chat.title().unwrap_or_default().to_string(),
            user_id: user.id.0 as i64,
            user_display_name: user.first_name.clone(),
            user_full_name: user.full_name(),
            user_language_code: user.language_code.clone(),
            old: MembershipSnapshot::from(&update.old_chat_member),
            new: MembershipSnapshot::from(&update.new_chat_member),
        }
    }
}
