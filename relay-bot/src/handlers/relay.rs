//! Command and button-press handling: static replies, the communicate and peer menus, and `/send`.
//!
//! Relay failures the user can fix (bad id, unknown target, stale button) are answered with a
//! short text. A delivery failure is returned as an error so the dispatcher logs it.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Menu, Message, MessageKind, Result};
use tracing::{instrument, warn};

use crate::command::Command;
use crate::directory::Directory;
use crate::error::RelayError;
use crate::router::Router;
use crate::selection::{build_peer_menu, communicate_menu, CallbackAction, PeerMenu};
use crate::texts;

pub struct RelayHandler {
    directory: Arc<Directory>,
    router: Router,
    bot: Arc<dyn Bot>,
    /// Set by the dispatcher from get_me(); commands mentioning another bot are skipped.
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
}

impl RelayHandler {
    pub fn new(
        directory: Arc<Directory>,
        bot: Arc<dyn Bot>,
        bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    ) -> Self {
        Self {
            router: Router::new(directory.clone(), bot.clone()),
            directory,
            bot,
            bot_username,
        }
    }

    async fn reply(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        self.bot.reply_to(message, text).await?;
        Ok(HandlerResponse::Reply(text.to_string()))
    }

    async fn reply_with_menu(
        &self,
        message: &Message,
        text: &str,
        menu: &Menu,
    ) -> Result<HandlerResponse> {
        self.bot.reply_with_menu(message, text, menu).await?;
        Ok(HandlerResponse::Reply(text.to_string()))
    }

    /// Answers a recoverable relay error with its user-facing text; delivery failures are returned.
    async fn recover(&self, message: &Message, err: RelayError) -> Result<HandlerResponse> {
        let reason = err.to_string();
        let text = match err {
            RelayError::Delivery(e) => return Err(e),
            RelayError::MalformedRequest => texts::SEND_USAGE,
            RelayError::UnknownTarget(_) => texts::TARGET_NOT_FOUND,
            RelayError::NotFound(_) => texts::PEER_UNAVAILABLE,
            RelayError::InvalidSelection(_) => texts::INVALID_SELECTION,
        };
        warn!(user_id = message.user.id, reason = %reason, "Relay request rejected");
        self.reply(message, text).await
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle_command(&self, message: &Message, command: Command) -> Result<HandlerResponse> {
        match command {
            Command::Start => self.reply(message, texts::START).await,
            Command::Situation => self.reply(message, texts::SITUATION).await,
            Command::Resources => self.reply(message, texts::RESOURCES).await,
            Command::Safety => self.reply(message, texts::SAFETY).await,
            Command::Other => self.reply(message, texts::OTHER).await,
            Command::Communicate => {
                self.reply_with_menu(message, texts::COMMUNICATE_PROMPT, &communicate_menu())
                    .await
            }
            Command::Send { target, body } => {
                let sender_name = message
                    .user
                    .display_name()
                    .unwrap_or_else(|| message.user.id.to_string());
                let outcome = self
                    .router
                    .relay(
                        message.user.id,
                        &sender_name,
                        target.as_deref().unwrap_or(""),
                        &body,
                    )
                    .await;
                match outcome {
                    Ok(receipt) => self.reply(message, &receipt.confirmation()).await,
                    Err(err) => self.recover(message, err).await,
                }
            }
        }
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id, data = %message.content))]
    async fn handle_callback(&self, message: &Message) -> Result<HandlerResponse> {
        let action = match CallbackAction::parse(&message.content) {
            Ok(action) => action,
            Err(err) => return self.recover(message, err).await,
        };
        match action {
            CallbackAction::ShowPeers => match build_peer_menu(&self.directory).await {
                PeerMenu::Empty => self.reply(message, texts::NO_PEERS).await,
                PeerMenu::Peers(menu) => {
                    self.reply_with_menu(message, texts::CHOOSE_PEER, &menu).await
                }
            },
            CallbackAction::Support => self.reply(message, texts::SUPPORT_UNAVAILABLE).await,
            CallbackAction::SelectPeer(peer_id) => match self.directory.lookup(peer_id).await {
                Ok(peer) => {
                    self.reply(message, &texts::peer_selected(&peer.label(), peer.id))
                        .await
                }
                Err(err) => self.recover(message, err).await,
            },
        }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.kind {
            MessageKind::Text => {
                let bot_username = self.bot_username.read().await.clone();
                match Command::parse(&message.content, bot_username.as_deref()) {
                    Some(command) => self.handle_command(message, command).await,
                    None => Ok(HandlerResponse::Ignore),
                }
            }
            MessageKind::Callback => self.handle_callback(message).await,
        }
    }
}
