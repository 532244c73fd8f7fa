//! Outbound side of the platform.
//!
//! [`Bot`] is transport-agnostic; `relay-telegram` implements it via teloxide and tests substitute mocks.

use crate::error::Result;
use crate::types::{Chat, Menu, Message};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat, independent of any inbound event.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Replies to the triggering event. For a button press this replaces the menu message.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Like [`Bot::reply_to`], with a menu of buttons attached.
    async fn reply_with_menu(&self, message: &Message, text: &str, menu: &Menu) -> Result<()>;
}
