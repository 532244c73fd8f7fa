//! Wraps teloxide::Bot and implements [`relay_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use relay_core::{Bot as CoreBot, Chat, Menu, Message, MessageKind, RelayBotError, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId};
use tracing::debug;

/// Parses a transport message id. Used to edit the message that carried a menu.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| RelayBotError::Bot(format!("Invalid message_id for edit: {}", s)))
}

/// Renders a core [`Menu`] as an inline keyboard, one button per row.
pub fn to_inline_keyboard(menu: &Menu) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        menu.buttons
            .iter()
            .map(|b| vec![InlineKeyboardButton::callback(b.label.clone(), b.data.clone())]),
    )
}

/// Thin wrapper around teloxide::Bot that implements relay-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// The menu message to replace when replying to a button press, if there is one.
    fn editable_target(message: &Message) -> Option<i32> {
        if message.kind != MessageKind::Callback {
            return None;
        }
        parse_message_id(&message.id).ok()
    }

    async fn send(&self, chat: &Chat, text: &str, menu: Option<&Menu>) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), text.to_string());
        let result = match menu {
            Some(menu) => request.reply_markup(to_inline_keyboard(menu)).await,
            None => request.await,
        };
        result.map_err(|e| RelayBotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn edit(&self, chat: &Chat, message_id: i32, text: &str, menu: Option<&Menu>) -> Result<()> {
        let request = self
            .bot
            .edit_message_text(ChatId(chat.id), MessageId(message_id), text.to_string());
        let result = match menu {
            Some(menu) => request.reply_markup(to_inline_keyboard(menu)).await,
            None => request.await,
        };
        result.map_err(|e| RelayBotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply(&self, message: &Message, text: &str, menu: Option<&Menu>) -> Result<()> {
        match Self::editable_target(message) {
            Some(message_id) => {
                debug!(chat_id = message.chat.id, message_id, "Replacing menu message");
                self.edit(&message.chat, message_id, text, menu).await
            }
            None => self.send(&message.chat, text, menu).await,
        }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send(chat, text, None).await
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.reply(message, text, None).await
    }

    async fn reply_with_menu(&self, message: &Message, text: &str, menu: &Menu) -> Result<()> {
        self.reply(message, text, Some(menu)).await
    }
}
