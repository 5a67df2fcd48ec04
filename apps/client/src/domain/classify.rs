//! Snapshot classification: whose seat is ours, whose turn it is, and
//! whether the game has ended.

use tracing::debug;

use crate::domain::snapshot::GameSnapshot;
use crate::errors::ClientError;

/// Per-snapshot facts the dispatcher branches on. Pure function of the
/// snapshot plus the local user name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub local_player_index: usize,
    pub active_player_index: usize,
    pub is_game_over: bool,
    pub is_local_turn: bool,
}

/// Classify a snapshot for the named local user.
///
/// The local seat is recomputed from scratch on every call and never
/// cached across snapshots. A missing seat is fatal for the cycle: the
/// client cannot act without knowing where it sits.
pub fn classify(snapshot: &GameSnapshot, local_user: &str) -> Result<Classification, ClientError> {
    let local_player_index = snapshot
        .players
        .iter()
        .position(|p| p.name == local_user)
        .ok_or_else(|| ClientError::SeatNotFound {
            user: local_user.to_string(),
        })?;

    let is_game_over = snapshot.winners.as_ref().is_some_and(|w| !w.is_empty());
    let classification = Classification {
        local_player_index,
        active_player_index: snapshot.active_player_index,
        is_game_over,
        is_local_turn: snapshot.active_player_index == local_player_index,
    };
    debug!(game_id = snapshot.game_id, ?classification, "classified snapshot");
    Ok(classification)
}
