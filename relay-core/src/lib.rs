//! # relay-core
//!
//! Core types and traits for the relay bot: [`Bot`], [`Handler`], [`HandlerChain`], message, user and
//! menu types, and tracing initialization. Transport-agnostic; used by relay-telegram and relay-bot.

pub mod bot;
pub mod chain;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use chain::HandlerChain;
pub use error::{RelayBotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Menu, MenuButton, Message, MessageKind,
    ToCoreMessage, ToCoreUser, User,
};
