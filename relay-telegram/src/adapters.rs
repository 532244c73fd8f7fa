//! Adapters from Telegram (teloxide) types to relay_core types.
//! Depends only on teloxide and relay_core type definitions.

use relay_core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to a core text event.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.0.text().unwrap_or("").to_string(),
            kind: MessageKind::Text,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Wraps a teloxide CallbackQuery (button press) for conversion to a core callback event.
///
/// `id` and `chat` point at the message that carried the menu so a reply can replace it. When the
/// menu message is not available (inline mode) the event falls back to the sender's private chat
/// with an empty id.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let (id, chat) = match self.0.message.as_ref() {
            Some(origin) => (
                origin.id().to_string(),
                Chat {
                    id: origin.chat().id.0,
                    chat_type: format!("{:?}", origin.chat().kind),
                },
            ),
            None => (String::new(), Chat::private(user.id)),
        };
        Message {
            id,
            user,
            chat,
            content: self.0.data.clone().unwrap_or_default(),
            kind: MessageKind::Callback,
            created_at: chrono::Utc::now(),
        }
    }
}
