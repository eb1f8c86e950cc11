//! Test data builders

use std::sync::Arc;

use serde_json::{json, Value};
use teloxide::types::ChatMemberUpdated;
use FarewellBuddy::config::I18nConfig;
use FarewellBuddy::i18n::I18n;
use FarewellBuddy::models::{MembershipSnapshot, MembershipStatus, MembershipUpdateEvent};

pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

pub fn test_chat_id() -> i64 {
    -1001234567890
}

pub fn test_user_id() -> i64 {
    987654321
}

/// Translations with the same keys as the shipped files
pub fn test_i18n() -> Arc<I18n> {
    let mut i18n = I18n::new(&I18nConfig {
        default_language: "hi".to_string(),
        supported_languages: vec!["hi".to_string(), "en".to_string()],
        translations_dir: "translations".to_string(),
    });
    i18n.add_translations("hi", json!({
        "farewell": { "feedback_request": "Namaste {name}, aapne '{group}' kyun chhoda?" }
    })).unwrap();
    i18n.add_translations("en", json!({
        "farewell": { "feedback_request": "Hello {name}, why did you leave '{group}'?" }
    })).unwrap();
    Arc::new(i18n)
}

/// Membership update in the test group for the test user
pub fn membership_event(old: MembershipSnapshot, new: MembershipSnapshot) -> MembershipUpdateEvent {
    MembershipUpdateEvent {
        chat_id: test_chat_id(),
        chat_title: "Swing Dancers".to_string(),
        user_id: test_user_id(),
        user_display_name: "Asha".to_string(),
        user_full_name: "Asha Verma".to_string(),
        user_language_code: None,
        old,
        new,
    }
}

/// A plain member leaving the test group
pub fn leave_event() -> MembershipUpdateEvent {
    membership_event(
        MembershipSnapshot::new(MembershipStatus::Member),
        MembershipSnapshot::new(MembershipStatus::Left),
    )
}

fn user_json(language_code: &str) -> Value {
    json!({
        "id": test_user_id(),
        "is_bot": false,
        "first_name": "Asha",
        "last_name": "Verma",
        "language_code": language_code
    })
}

/// Chat member JSON with just a status, e.g. `"member"` or `"left"`
pub fn member_json(status: &str) -> Value {
    json!({ "user": user_json("en"), "status": status })
}

/// Restricted chat member JSON; `is_member` tells whether they are still in the chat
pub fn restricted_member_json(is_member: bool) -> Value {
    json!({
        "user": user_json("en"),
        "status": "restricted",
        "until_date": 0,
        "is_member": is_member,
        "can_send_messages": false,
        "can_send_audios": false,
        "can_send_documents": false,
        "can_send_photos": false,
        "can_send_videos": false,
        "can_send_video_notes": false,
        "can_send_voice_notes": false,
        "can_send_polls": false,
        "can_send_other_messages": false,
        "can_add_web_page_previews": false,
        "can_change_info": false,
        "can_invite_users": false,
        "can_pin_messages": false,
        "can_manage_topics": false
    })
}

/// Telegram `chat_member` update payload for the test user
pub fn chat_member_update(chat_id: i64, old_status: &str, new_status: &str) -> ChatMemberUpdated {
    chat_member_update_from(chat_id, member_json(old_status), member_json(new_status))
}

/// Telegram `chat_member` update payload with explicit member objects
pub fn chat_member_update_from(chat_id: i64, old_member: Value, new_member: Value) -> ChatMemberUpdated {
    let payload = json!({
        "chat": {
            "id": chat_id,
            "title": "Swing Dancers",
            "type": "supergroup"
        },
        "from": user_json("en"),
        "date": 1640995200,
        "old_chat_member": old_member,
        "new_chat_member": new_member
    });

    serde_json::from_value(payload).expect("valid chat member update")
}
