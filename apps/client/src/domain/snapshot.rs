//! Server-pushed view of one game: the snapshot the dispatcher reacts to.
//!
//! A snapshot arrives whole and is fully replaced, never patched, by the
//! next push. Everything the dispatcher derives from it (seat, turn,
//! capability flags) is recomputed per snapshot and discarded afterwards.

use serde::{Deserialize, Serialize};

use crate::domain::cards::{Card, Role};

/// One building in a player's camp. `active` means its effect currently
/// applies; the server decides that, the client only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub active: bool,
}

/// Public-plus-own view of one seat. Index within `GameSnapshot::players`
/// is stable identity for the lifetime of that snapshot only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    #[serde(default)]
    pub buildings: Vec<Building>,
    /// Own hand; opaque to the dispatcher, rendered by prompt flows.
    #[serde(default)]
    pub hand: Vec<Card>,
    /// Card drawn for a pending fountain-build decision, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fountain_card: Option<Card>,
    /// Cards this player has revealed for a legionary demand.
    #[serde(default)]
    pub revealed: Vec<Card>,
}

/// What the server expects the active player to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedAction {
    LeadOrThinker,
    ThinkerType,
    FollowRole,
    PatronFromHand,
    PatronFromPool,
    UseLatrine,
    UseSewer,
    PatronFromDeck,
    UseVomitorium,
    BarOrAqueduct,
    UseFountain,
    SkipThinker,
    UseSenate,
    Laborer,
    Merchant,
    Craftsman,
    FountainBuild,
    Architect,
    Stairway,
    Prison,
    Legionary,
    GiveCards,
    TakePoolCards,
    /// Wire tag this client does not recognize. Dispatch logs a warning
    /// and stalls until the next snapshot supersedes it.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: i64,
    /// Sequence number the server expects for the next action in this game.
    pub action_number: u32,
    pub active_player_index: usize,
    /// Turn order. Exactly one entry matches the locally authenticated user.
    pub players: Vec<PlayerState>,
    /// Non-empty once the game has ended.
    #[serde(default)]
    pub winners: Option<Vec<String>>,
    pub expected_action: ExpectedAction,

    /// Shared card pool; opaque to the dispatcher, rendered by prompt flows.
    #[serde(default)]
    pub pool: Vec<Card>,

    // Context fields present only for some expected actions.
    #[serde(default)]
    pub role_led: Option<Role>,
    #[serde(default)]
    pub legionary_count: Option<u8>,
    #[serde(default)]
    pub legionary_player_index: Option<usize>,
    /// Out-of-town building allowed for the pending build action.
    #[serde(default)]
    pub oot_allowed: bool,
}
