//! # relay-bot
//!
//! Chat-relay bot: users discover each other through a peer menu and exchange text with
//! `/send <id> <text>`, the bot forwarding each message. Wires relay-core's handler chain to the
//! relay-telegram dispatcher.

pub mod cli;
pub mod command;
pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod router;
pub mod runner;
pub mod selection;
pub mod texts;

pub use cli::{Cli, Commands};
pub use command::Command;
pub use config::BotConfig;
pub use directory::{Directory, Participant};
pub use error::RelayError;
pub use handlers::{LoggingHandler, RegistrationHandler, RelayHandler};
pub use router::{RelayReceipt, Router};
pub use runner::{build_handler_chain, run_bot};
pub use selection::{
    build_peer_menu, communicate_menu, resolve_selection, routing_data_for, CallbackAction,
    PeerMenu,
};
