//! The wire unit: one numbered action plus its ordered argument list.

use serde::{Deserialize, Serialize};

use crate::domain::cards::Card;

/// Action verbs the server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    ThinkerOrLead,
    ThinkerType,
    LeadRole,
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
    Fountain,
    Architect,
    Stairway,
    Prison,
    Legionary,
    GiveCards,
    TakePoolCards,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ThinkerOrLead => "THINKER_OR_LEAD",
            ActionKind::ThinkerType => "THINKER_TYPE",
            ActionKind::LeadRole => "LEAD_ROLE",
            ActionKind::FollowRole => "FOLLOW_ROLE",
            ActionKind::PatronFromHand => "PATRON_FROM_HAND",
            ActionKind::PatronFromPool => "PATRON_FROM_POOL",
            ActionKind::UseLatrine => "USE_LATRINE",
            ActionKind::UseSewer => "USE_SEWER",
            ActionKind::PatronFromDeck => "PATRON_FROM_DECK",
            ActionKind::UseVomitorium => "USE_VOMITORIUM",
            ActionKind::BarOrAqueduct => "BAR_OR_AQUEDUCT",
            ActionKind::UseFountain => "USE_FOUNTAIN",
            ActionKind::SkipThinker => "SKIP_THINKER",
            ActionKind::UseSenate => "USE_SENATE",
            ActionKind::Laborer => "LABORER",
            ActionKind::Merchant => "MERCHANT",
            ActionKind::Craftsman => "CRAFTSMAN",
            ActionKind::Fountain => "FOUNTAIN",
            ActionKind::Architect => "ARCHITECT",
            ActionKind::Stairway => "STAIRWAY",
            ActionKind::Prison => "PRISON",
            ActionKind::Legionary => "LEGIONARY",
            ActionKind::GiveCards => "GIVE_CARDS",
            ActionKind::TakePoolCards => "TAKE_POOL_CARDS",
        }
    }
}

/// Opaque argument value. Untagged so args serialize as plain JSON
/// scalars (`true`, `2`, `"Temple"`, `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionArg {
    Bool(bool),
    Number(i64),
    Text(String),
    Null,
}

impl ActionArg {
    /// Positional slot that may be empty: `None` becomes an explicit
    /// `null` placeholder, preserving argument arity.
    pub fn slot(text: Option<String>) -> Self {
        match text {
            Some(t) => ActionArg::Text(t),
            None => ActionArg::Null,
        }
    }
}

impl From<bool> for ActionArg {
    fn from(b: bool) -> Self {
        ActionArg::Bool(b)
    }
}

impl From<i64> for ActionArg {
    fn from(n: i64) -> Self {
        ActionArg::Number(n)
    }
}

impl From<Card> for ActionArg {
    fn from(card: Card) -> Self {
        ActionArg::Text(card.0)
    }
}

impl From<&str> for ActionArg {
    fn from(text: &str) -> Self {
        ActionArg::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAction {
    pub game_id: i64,
    pub action_number: u32,
    pub kind: ActionKind,
    pub args: Vec<ActionArg>,
}
