//! Relay failures. All but [`RelayError::Delivery`] are recovered at the handler boundary and
//! shown to the user; delivery failures go up to the dispatcher.

use relay_core::RelayBotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    /// Directory lookup miss.
    #[error("Participant {0} not found")]
    NotFound(i64),

    /// Routing data from a button press that does not decode to a peer.
    #[error("Invalid selection: {0:?}")]
    InvalidSelection(String),

    /// `/send` without a numeric target id.
    #[error("Malformed relay request")]
    MalformedRequest,

    /// Well-formed target id that is not in the directory.
    #[error("Unknown relay target {0}")]
    UnknownTarget(i64),

    /// The platform rejected the outbound message.
    #[error("Delivery failed: {0}")]
    Delivery(#[from] RelayBotError),
}
