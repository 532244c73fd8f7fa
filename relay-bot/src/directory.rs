//! Participant directory: every user who has interacted with the bot, keyed by platform id.
//!
//! Presence in the directory is the only criterion for being reachable through `/send` and for
//! appearing in the peer menu. Entries are never removed and there is no size bound, so the
//! directory grows with the number of distinct users seen since startup. State lives in memory
//! only and is lost on restart.
//!
//! The peer menu lists every participant as one inline button, and Telegram rejects keyboards
//! with more than 100 buttons. Past 100 participants `show_users` therefore fails to send; the
//! failure is logged by the dispatcher. No paging or cap is applied.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::RelayError;

/// A known user: immutable platform id and the latest display name seen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: i64,
    pub name: Option<String>,
}

impl Participant {
    /// Text shown to other users: the display name, or the numeric id when there is none.
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }
}

#[derive(Default)]
struct Entries {
    /// First-registration order.
    order: Vec<Participant>,
    /// id -> position in `order`.
    index: HashMap<i64, usize>,
}

/// Shared participant registry. All reads and writes go through one lock; callers get owned
/// copies so no lock is held across I/O.
#[derive(Default)]
pub struct Directory {
    entries: RwLock<Entries>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `id` or overwrites its name, keeping its original position.
    /// Blank names are stored as absent. Returns true when `id` was not known before.
    pub async fn register(&self, id: i64, name: Option<String>) -> bool {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let mut entries = self.entries.write().await;
        match entries.index.get(&id).copied() {
            Some(pos) => {
                entries.order[pos].name = name;
                false
            }
            None => {
                let pos = entries.order.len();
                entries.order.push(Participant { id, name });
                entries.index.insert(id, pos);
                debug!(participant_id = id, total = pos + 1, "Participant registered");
                true
            }
        }
    }

    /// Snapshot of all participants in registration order. Each call reflects the current state.
    pub async fn list_all(&self) -> Vec<Participant> {
        self.entries.read().await.order.clone()
    }

    /// The participant with `id`, or [`RelayError::NotFound`].
    pub async fn lookup(&self, id: i64) -> Result<Participant, RelayError> {
        let entries = self.entries.read().await;
        entries
            .index
            .get(&id)
            .map(|&pos| entries.order[pos].clone())
            .ok_or(RelayError::NotFound(id))
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
