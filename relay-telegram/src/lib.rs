//! # relay-telegram
//!
//! Telegram layer: adapters, [`relay_core::Bot`] implementation, minimal config, dispatcher runner.
//! Handles only Telegram connectivity and handler-chain execution; relay logic lives in relay-bot.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{parse_message_id, to_inline_keyboard, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::run_dispatcher;
