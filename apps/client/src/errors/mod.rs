//! Client-core error type.
//!
//! Anything recoverable degrades to "no action taken this cycle" and is
//! logged at the site instead of surfacing here; the server's turn state
//! stays authoritative either way.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The authenticated user holds no seat in the snapshot. Fatal for the
    /// cycle: the client must not guess whose turn it is.
    #[error("no seat for user '{user}' in snapshot")]
    SeatNotFound { user: String },

    /// The transport refused or failed to deliver an action. Retry policy
    /// belongs to the transport, not to the dispatcher.
    #[error("transport delivery failed: {0}")]
    Transport(String),
}
