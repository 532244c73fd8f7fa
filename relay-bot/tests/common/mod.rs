//! Shared helpers for relay-bot integration tests.

pub mod mock_bot;

use chrono::Utc;
use relay_core::{Chat, Message, MessageKind, User};

/// A user with the given id and optional username.
pub fn user(id: i64, username: Option<&str>) -> User {
    User {
        id,
        username: username.map(str::to_string),
        first_name: None,
        last_name: None,
    }
}

/// A private-chat text message from `user`.
pub fn text_message(user: &User, text: &str) -> Message {
    Message {
        id: "100".to_string(),
        user: user.clone(),
        chat: Chat::private(user.id),
        content: text.to_string(),
        kind: MessageKind::Text,
        created_at: Utc::now(),
    }
}

/// A button press by `user` carrying `data`, on menu message "200".
pub fn button_press(user: &User, data: &str) -> Message {
    Message {
        id: "200".to_string(),
        kind: MessageKind::Callback,
        ..text_message(user, data)
    }
}
