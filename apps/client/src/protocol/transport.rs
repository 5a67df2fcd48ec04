//! Outbound delivery seam.

use crate::errors::ClientError;
use crate::protocol::action::NetworkAction;

/// Delivers one wire action to the server. Encoding, queuing and retry
/// policy live behind this trait, not in the dispatcher.
pub trait Transport {
    fn deliver(&self, action: NetworkAction) -> Result<(), ClientError>;
}
