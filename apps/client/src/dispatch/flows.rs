//! Prompt-flow seam: one entry point per expected action.
//!
//! Flows own their dialogs and labels; the dispatcher supplies only the
//! capability flags and context a flow needs, plus a completion callback.
//! A flow may resolve its callback synchronously or after an arbitrary
//! user-driven delay. Only `follow_role` may fire more than once.

use crate::domain::cards::{Card, Material, Role};
use crate::protocol::action::{ActionArg, ActionKind};

/// One-shot completion callback.
pub type Completion<T> = Box<dyn FnOnce(T)>;

/// Callback for flows that resolve one decision at a time, in decision
/// order; each invocation becomes one network send.
pub type RepeatedCompletion = Box<dyn FnMut(ActionKind, Vec<ActionArg>)>;

/// Allowed petition sizes when leading or following with off-role cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetitionRange {
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadContext {
    pub has_palace: bool,
    pub petition: PetitionRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowContext {
    pub role_led: Option<Role>,
    pub has_palace: bool,
    pub petition: PetitionRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaborerContext {
    pub has_dock: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerchantContext {
    pub has_basilica: bool,
    pub has_atrium: bool,
}

/// Shared flags for flows that start buildings or place materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildContext {
    pub oot_allowed: bool,
    pub has_road: bool,
    pub has_tower: bool,
    pub has_scriptorium: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FountainContext {
    pub fountain_card: Option<Card>,
    pub build: BuildContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchitectContext {
    pub build: BuildContext,
    pub has_archway: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StairwayContext {
    pub has_road: bool,
    pub has_tower: bool,
    pub has_scriptorium: bool,
    pub has_archway: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegionaryContext {
    /// How many demands the pending legionary action covers.
    pub count: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GiveCardsContext {
    /// Materials demanded by the opponent's revealed cards, in reveal order.
    pub demanded: Vec<Material>,
    pub opponent_has_bridge: bool,
    pub opponent_has_coliseum: bool,
    /// Wall, or Palisade against an opponent without a Bridge.
    pub immune: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TakePoolContext {
    pub demanded: Vec<Material>,
}

/// Resolved build decision. `material` is absent when starting a
/// building, `site` is absent when adding to an existing one; both are
/// transmitted as positional nulls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildChoice {
    pub building: Option<Card>,
    pub material: Option<Card>,
    pub site: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaborerChoice {
    pub from_hand: Option<Card>,
    pub from_pool: Option<Card>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MerchantChoice {
    pub from_stockpile: Option<Card>,
    pub from_hand: Option<Card>,
    pub from_deck: bool,
}

pub trait PromptFlows {
    /// Rendering surface handle supplied by the display collaborator and
    /// passed through untouched.
    type Surface;

    fn lead_or_thinker(
        &mut self,
        surface: &mut Self::Surface,
        ctx: LeadContext,
        done: Completion<(ActionKind, Vec<ActionArg>)>,
    );
    fn thinker_type(
        &mut self,
        surface: &mut Self::Surface,
        done: Completion<(ActionKind, Vec<ActionArg>)>,
    );
    fn follow_role(&mut self, surface: &mut Self::Surface, ctx: FollowContext, done: RepeatedCompletion);
    fn patron_from_hand(&mut self, surface: &mut Self::Surface, done: Completion<Option<Card>>);
    fn patron_from_pool(&mut self, surface: &mut Self::Surface, done: Completion<Option<Card>>);
    fn use_latrine(&mut self, surface: &mut Self::Surface, done: Completion<Option<Card>>);
    fn use_sewer(&mut self, surface: &mut Self::Surface, done: Completion<Vec<Card>>);
    fn patron_from_deck(&mut self, surface: &mut Self::Surface, done: Completion<bool>);
    fn use_vomitorium(&mut self, surface: &mut Self::Surface, done: Completion<bool>);
    fn bar_or_aqueduct(&mut self, surface: &mut Self::Surface, done: Completion<bool>);
    fn use_fountain(&mut self, surface: &mut Self::Surface, done: Completion<bool>);
    fn skip_thinker(&mut self, surface: &mut Self::Surface, done: Completion<bool>);
    fn use_senate(&mut self, surface: &mut Self::Surface, done: Completion<Vec<ActionArg>>);
    fn laborer(
        &mut self,
        surface: &mut Self::Surface,
        ctx: LaborerContext,
        done: Completion<LaborerChoice>,
    );
    fn merchant(
        &mut self,
        surface: &mut Self::Surface,
        ctx: MerchantContext,
        done: Completion<MerchantChoice>,
    );
    fn craftsman(
        &mut self,
        surface: &mut Self::Surface,
        ctx: BuildContext,
        done: Completion<BuildChoice>,
    );
    fn fountain_build(
        &mut self,
        surface: &mut Self::Surface,
        ctx: FountainContext,
        done: Completion<BuildChoice>,
    );
    fn architect(
        &mut self,
        surface: &mut Self::Surface,
        ctx: ArchitectContext,
        done: Completion<(BuildChoice, bool)>,
    );
    fn stairway(
        &mut self,
        surface: &mut Self::Surface,
        ctx: StairwayContext,
        done: Completion<(Option<Card>, Option<Card>)>,
    );
    fn prison(&mut self, surface: &mut Self::Surface, done: Completion<Option<Card>>);
    fn legionary(
        &mut self,
        surface: &mut Self::Surface,
        ctx: LegionaryContext,
        done: Completion<Vec<Card>>,
    );
    fn give_cards(
        &mut self,
        surface: &mut Self::Surface,
        ctx: GiveCardsContext,
        done: Completion<Vec<Card>>,
    );
    fn take_pool_cards(
        &mut self,
        surface: &mut Self::Surface,
        ctx: TakePoolContext,
        done: Completion<Vec<Card>>,
    );
}
