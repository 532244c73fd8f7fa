//! Menus and the routing data carried by their buttons.
//!
//! Picking a peer is stateless: it only tells the user which `/send` command to type next. No
//! session or pending conversation is recorded.

use relay_core::{Menu, MenuButton};

use crate::directory::Directory;
use crate::error::RelayError;
use crate::texts;

const SHOW_PEERS_DATA: &str = "show_users";
const SUPPORT_DATA: &str = "support";
const SELECT_PEER_PREFIX: &str = "chat_";

/// Decoded button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// List the directory as a peer menu.
    ShowPeers,
    /// Talk to supporters (not available yet).
    Support,
    /// A peer was picked from the peer menu.
    SelectPeer(i64),
}

impl CallbackAction {
    /// Routing data to attach to a button.
    pub fn encode(&self) -> String {
        match self {
            CallbackAction::ShowPeers => SHOW_PEERS_DATA.to_string(),
            CallbackAction::Support => SUPPORT_DATA.to_string(),
            CallbackAction::SelectPeer(id) => routing_data_for(*id),
        }
    }

    /// Decodes routing data; anything unrecognised is [`RelayError::InvalidSelection`].
    pub fn parse(data: &str) -> Result<Self, RelayError> {
        match data {
            SHOW_PEERS_DATA => Ok(CallbackAction::ShowPeers),
            SUPPORT_DATA => Ok(CallbackAction::Support),
            other => resolve_selection(other).map(CallbackAction::SelectPeer),
        }
    }
}

/// Routing data for the peer-menu button of participant `id`.
pub fn routing_data_for(id: i64) -> String {
    format!("{}{}", SELECT_PEER_PREFIX, id)
}

/// Peer id carried by a peer-menu button.
pub fn resolve_selection(choice: &str) -> Result<i64, RelayError> {
    choice
        .strip_prefix(SELECT_PEER_PREFIX)
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| RelayError::InvalidSelection(choice.to_string()))
}

/// The directory rendered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerMenu {
    /// Nobody to talk to; shown as a single text-only reply.
    Empty,
    /// One button per participant, in registration order.
    Peers(Menu),
}

impl PeerMenu {
    pub fn text(&self) -> &'static str {
        match self {
            PeerMenu::Empty => texts::NO_PEERS,
            PeerMenu::Peers(_) => texts::CHOOSE_PEER,
        }
    }

    pub fn buttons(&self) -> &[MenuButton] {
        match self {
            PeerMenu::Empty => &[],
            PeerMenu::Peers(menu) => &menu.buttons,
        }
    }
}

/// Builds the peer menu from the current directory contents, one button per participant.
///
/// Not truncated: Telegram refuses inline keyboards over 100 buttons, so with a larger
/// directory the reply carrying this menu fails to send.
pub async fn build_peer_menu(directory: &Directory) -> PeerMenu {
    let participants = directory.list_all().await;
    if participants.is_empty() {
        return PeerMenu::Empty;
    }
    PeerMenu::Peers(Menu::new(
        participants
            .iter()
            .map(|p| MenuButton::new(p.label(), routing_data_for(p.id)))
            .collect(),
    ))
}

/// The `/communicate` menu: talk with other people, or with supporters.
pub fn communicate_menu() -> Menu {
    Menu::new(vec![
        MenuButton::new(texts::BUTTON_SHOW_PEERS, CallbackAction::ShowPeers.encode()),
        MenuButton::new(texts::BUTTON_SUPPORT, CallbackAction::Support.encode()),
    ])
}
