//! Recording implementation of [`relay_core::Bot`] for integration tests.
//!
//! Every outbound call is stored as a [`Sent`] so tests can assert on replies, menus and relayed
//! messages without hitting Telegram. Direct sends can be made to fail to exercise the delivery
//! error path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use relay_core::{Bot, Chat, Menu, Message, RelayBotError, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    /// `send_message` to a chat.
    Direct { chat_id: i64, text: String },
    /// `reply_to` / `reply_with_menu` on an inbound event.
    Reply {
        chat_id: i64,
        text: String,
        menu: Option<Menu>,
    },
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_direct: AtomicBool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later `send_message` fail like a blocked chat would.
    pub fn fail_direct_sends(&self) {
        self.fail_direct.store(true, Ordering::SeqCst);
    }

    /// Drains the recorded calls.
    pub fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.fail_direct.load(Ordering::SeqCst) {
            return Err(RelayBotError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Direct {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Reply {
            chat_id: message.chat.id,
            text: text.to_string(),
            menu: None,
        });
        Ok(())
    }

    async fn reply_with_menu(&self, message: &Message, text: &str, menu: &Menu) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Reply {
            chat_id: message.chat.id,
            text: text.to_string(),
            menu: Some(menu.clone()),
        });
        Ok(())
    }
}
