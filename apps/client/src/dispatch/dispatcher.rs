//! Maps a classified snapshot to exactly one prompt flow and wires the
//! flow's decision back into numbered network sends.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::dispatch::flows::{
    ArchitectContext, BuildChoice, BuildContext, Completion, FollowContext, FountainContext,
    GiveCardsContext, LaborerContext, LeadContext, LegionaryContext, MerchantContext,
    PetitionRange, PromptFlows, StairwayContext, TakePoolContext,
};
use crate::dispatch::sequencer::ActionSequencer;
use crate::domain::capabilities::Capabilities;
use crate::domain::cards::Card;
use crate::domain::classify::classify;
use crate::domain::rules::{BuildingKind, RulesLookup};
use crate::domain::snapshot::{ExpectedAction, GameSnapshot};
use crate::errors::ClientError;
use crate::protocol::action::{ActionArg, ActionKind};
use crate::protocol::transport::Transport;

/// Drives one client seat: classify each pushed snapshot, engage the
/// prompt flow the expected action calls for, and emit the resulting
/// network actions in order.
pub struct Dispatcher<F: PromptFlows, R: RulesLookup> {
    flows: F,
    rules: R,
    transport: Rc<dyn Transport>,
    local_user: String,
}

impl<F: PromptFlows, R: RulesLookup> Dispatcher<F, R> {
    pub fn new(flows: F, rules: R, transport: Rc<dyn Transport>, local_user: impl Into<String>) -> Self {
        Self {
            flows,
            rules,
            transport,
            local_user: local_user.into(),
        }
    }

    pub fn flows(&self) -> &F {
        &self.flows
    }

    /// Process one server push. At most one prompt flow is engaged; all
    /// sends for the cycle are numbered from the snapshot's action number.
    ///
    /// Game over, an opponent's turn and an absent snapshot ("game not
    /// started") are all quiet no-ops. An unknown expected action logs a
    /// warning and stalls until the next snapshot supersedes it.
    pub fn handle_snapshot(
        &mut self,
        snapshot: Option<&GameSnapshot>,
        surface: &mut F::Surface,
    ) -> Result<(), ClientError> {
        let Some(snapshot) = snapshot else {
            debug!("no snapshot; game not started");
            return Ok(());
        };

        let class = classify(snapshot, &self.local_user)?;
        if class.is_game_over {
            debug!(game_id = snapshot.game_id, "game over; nothing to prompt");
            return Ok(());
        }
        if !class.is_local_turn {
            debug!(
                game_id = snapshot.game_id,
                active = class.active_player_index,
                "waiting on another player"
            );
            return Ok(());
        }

        let me = class.local_player_index;
        let caps = Capabilities::new(snapshot, &self.rules);
        let seq = Rc::new(RefCell::new(ActionSequencer::new(
            snapshot.game_id,
            snapshot.action_number,
            Rc::clone(&self.transport),
        )));

        match snapshot.expected_action {
            ExpectedAction::LeadOrThinker => {
                let ctx = LeadContext {
                    has_palace: caps.has(me, BuildingKind::Palace),
                    petition: petition_range(&caps, me),
                };
                let seq = Rc::clone(&seq);
                self.flows.lead_or_thinker(
                    surface,
                    ctx,
                    Box::new(move |(kind, args)| {
                        let mut seq = seq.borrow_mut();
                        if kind == ActionKind::ThinkerType {
                            seq.send(ActionKind::ThinkerOrLead, vec![ActionArg::Bool(true)]);
                            seq.send(kind, args);
                        } else {
                            seq.send(ActionKind::ThinkerOrLead, vec![ActionArg::Bool(false)]);
                            seq.send(ActionKind::LeadRole, args);
                        }
                    }),
                );
            }
            ExpectedAction::ThinkerType => {
                let seq = Rc::clone(&seq);
                self.flows.thinker_type(
                    surface,
                    Box::new(move |(kind, args)| seq.borrow_mut().send(kind, args)),
                );
            }
            ExpectedAction::FollowRole => {
                let ctx = FollowContext {
                    role_led: snapshot.role_led,
                    has_palace: caps.has(me, BuildingKind::Palace),
                    petition: petition_range(&caps, me),
                };
                let seq = Rc::clone(&seq);
                self.flows.follow_role(
                    surface,
                    ctx,
                    Box::new(move |kind, args| seq.borrow_mut().send(kind, args)),
                );
            }
            ExpectedAction::PatronFromHand => {
                let seq = Rc::clone(&seq);
                self.flows.patron_from_hand(
                    surface,
                    Box::new(move |card| {
                        seq.borrow_mut().send(ActionKind::PatronFromHand, card_args(card));
                    }),
                );
            }
            ExpectedAction::PatronFromPool => {
                let seq = Rc::clone(&seq);
                self.flows.patron_from_pool(
                    surface,
                    Box::new(move |card| {
                        seq.borrow_mut().send(ActionKind::PatronFromPool, card_args(card));
                    }),
                );
            }
            ExpectedAction::UseLatrine => {
                let seq = Rc::clone(&seq);
                self.flows.use_latrine(
                    surface,
                    Box::new(move |card| {
                        seq.borrow_mut().send(ActionKind::UseLatrine, card_args(card));
                    }),
                );
            }
            ExpectedAction::UseSewer => {
                let seq = Rc::clone(&seq);
                self.flows.use_sewer(
                    surface,
                    Box::new(move |cards| {
                        seq.borrow_mut().send(ActionKind::UseSewer, cards_args(cards));
                    }),
                );
            }
            ExpectedAction::PatronFromDeck => {
                binary_flow(&mut self.flows, surface, ActionKind::PatronFromDeck, &seq, F::patron_from_deck);
            }
            ExpectedAction::UseVomitorium => {
                binary_flow(&mut self.flows, surface, ActionKind::UseVomitorium, &seq, F::use_vomitorium);
            }
            ExpectedAction::BarOrAqueduct => {
                binary_flow(&mut self.flows, surface, ActionKind::BarOrAqueduct, &seq, F::bar_or_aqueduct);
            }
            ExpectedAction::UseFountain => {
                binary_flow(&mut self.flows, surface, ActionKind::UseFountain, &seq, F::use_fountain);
            }
            ExpectedAction::SkipThinker => {
                binary_flow(&mut self.flows, surface, ActionKind::SkipThinker, &seq, F::skip_thinker);
            }
            ExpectedAction::UseSenate => {
                let seq = Rc::clone(&seq);
                self.flows.use_senate(
                    surface,
                    Box::new(move |args| seq.borrow_mut().send(ActionKind::UseSenate, args)),
                );
            }
            ExpectedAction::Laborer => {
                let ctx = LaborerContext {
                    has_dock: caps.has(me, BuildingKind::Dock),
                };
                let seq = Rc::clone(&seq);
                self.flows.laborer(
                    surface,
                    ctx,
                    Box::new(move |choice| {
                        // Hand card first, pool card second; empty picks elided.
                        let args = [choice.from_hand, choice.from_pool]
                            .into_iter()
                            .flatten()
                            .map(ActionArg::from)
                            .collect();
                        seq.borrow_mut().send(ActionKind::Laborer, args);
                    }),
                );
            }
            ExpectedAction::Merchant => {
                let ctx = MerchantContext {
                    has_basilica: caps.has(me, BuildingKind::Basilica),
                    has_atrium: caps.has(me, BuildingKind::Atrium),
                };
                let seq = Rc::clone(&seq);
                self.flows.merchant(
                    surface,
                    ctx,
                    Box::new(move |choice| {
                        // Deck flag first, then hand before stockpile, empty picks elided.
                        let mut args = vec![ActionArg::Bool(choice.from_deck)];
                        args.extend(
                            [choice.from_hand, choice.from_stockpile]
                                .into_iter()
                                .flatten()
                                .map(ActionArg::from),
                        );
                        seq.borrow_mut().send(ActionKind::Merchant, args);
                    }),
                );
            }
            ExpectedAction::Craftsman => {
                let ctx = build_context(snapshot, &caps, me);
                let seq = Rc::clone(&seq);
                self.flows.craftsman(
                    surface,
                    ctx,
                    Box::new(move |choice| {
                        seq.borrow_mut().send(ActionKind::Craftsman, build_args(choice));
                    }),
                );
            }
            ExpectedAction::FountainBuild => {
                let ctx = FountainContext {
                    fountain_card: snapshot.players[me].fountain_card.clone(),
                    build: build_context(snapshot, &caps, me),
                };
                let seq = Rc::clone(&seq);
                self.flows.fountain_build(
                    surface,
                    ctx,
                    Box::new(move |choice| {
                        seq.borrow_mut().send(ActionKind::Fountain, build_args(choice));
                    }),
                );
            }
            ExpectedAction::Architect => {
                let ctx = ArchitectContext {
                    build: build_context(snapshot, &caps, me),
                    has_archway: caps.has(me, BuildingKind::Archway),
                };
                let seq = Rc::clone(&seq);
                self.flows.architect(
                    surface,
                    ctx,
                    // The pool flag is part of the flow's decision but is
                    // deliberately not transmitted; the server derives it.
                    Box::new(move |(choice, _from_pool)| {
                        seq.borrow_mut().send(ActionKind::Architect, build_args(choice));
                    }),
                );
            }
            ExpectedAction::Stairway => {
                let ctx = StairwayContext {
                    has_road: caps.has(me, BuildingKind::Road),
                    has_tower: caps.has(me, BuildingKind::Tower),
                    has_scriptorium: caps.has(me, BuildingKind::Scriptorium),
                    has_archway: caps.has(me, BuildingKind::Archway),
                };
                let seq = Rc::clone(&seq);
                self.flows.stairway(
                    surface,
                    ctx,
                    Box::new(move |(building, material)| {
                        let args = vec![
                            ActionArg::slot(building.map(|c| c.0)),
                            ActionArg::slot(material.map(|c| c.0)),
                        ];
                        seq.borrow_mut().send(ActionKind::Stairway, args);
                    }),
                );
            }
            ExpectedAction::Prison => {
                let seq = Rc::clone(&seq);
                self.flows.prison(
                    surface,
                    Box::new(move |building| {
                        seq.borrow_mut().send(ActionKind::Prison, card_args(building));
                    }),
                );
            }
            ExpectedAction::Legionary => {
                let ctx = LegionaryContext {
                    count: snapshot.legionary_count.unwrap_or(1),
                };
                let seq = Rc::clone(&seq);
                self.flows.legionary(
                    surface,
                    ctx,
                    Box::new(move |cards| {
                        seq.borrow_mut().send(ActionKind::Legionary, cards_args(cards));
                    }),
                );
            }
            ExpectedAction::GiveCards => {
                let Some(opponent) = snapshot.legionary_player_index else {
                    warn!(
                        game_id = snapshot.game_id,
                        "give_cards expected but no legionary player in snapshot"
                    );
                    return Ok(());
                };
                let opponent_has_bridge = caps.has(opponent, BuildingKind::Bridge);
                let ctx = GiveCardsContext {
                    demanded: caps.demanded_materials(opponent),
                    opponent_has_bridge,
                    opponent_has_coliseum: caps.has(opponent, BuildingKind::Coliseum),
                    immune: caps.has(me, BuildingKind::Wall)
                        || (caps.has(me, BuildingKind::Palisade) && !opponent_has_bridge),
                };
                let seq = Rc::clone(&seq);
                self.flows.give_cards(
                    surface,
                    ctx,
                    Box::new(move |cards| {
                        seq.borrow_mut().send(ActionKind::GiveCards, cards_args(cards));
                    }),
                );
            }
            ExpectedAction::TakePoolCards => {
                let ctx = TakePoolContext {
                    demanded: caps.demanded_materials(me),
                };
                let seq = Rc::clone(&seq);
                self.flows.take_pool_cards(
                    surface,
                    ctx,
                    Box::new(move |cards| {
                        seq.borrow_mut().send(ActionKind::TakePoolCards, cards_args(cards));
                    }),
                );
            }
            ExpectedAction::Unknown => {
                warn!(
                    game_id = snapshot.game_id,
                    "unrecognized expected action; waiting for next snapshot"
                );
            }
        }

        Ok(())
    }
}

/// Shared wiring for the five yes/no flows: one send, `[bool]`.
fn binary_flow<F: PromptFlows>(
    flows: &mut F,
    surface: &mut F::Surface,
    kind: ActionKind,
    seq: &Rc<RefCell<ActionSequencer>>,
    flow: impl FnOnce(&mut F, &mut F::Surface, Completion<bool>),
) {
    let seq = Rc::clone(seq);
    flow(
        flows,
        surface,
        Box::new(move |choice| seq.borrow_mut().send(kind, vec![ActionArg::Bool(choice)])),
    );
}

fn petition_range<R: RulesLookup>(caps: &Capabilities<'_, R>, me: usize) -> PetitionRange {
    PetitionRange {
        min: if caps.has(me, BuildingKind::Circus) { 2 } else { 3 },
        max: 3,
    }
}

fn build_context<R: RulesLookup>(
    snapshot: &GameSnapshot,
    caps: &Capabilities<'_, R>,
    me: usize,
) -> BuildContext {
    BuildContext {
        oot_allowed: snapshot.oot_allowed,
        has_road: caps.has(me, BuildingKind::Road),
        has_tower: caps.has(me, BuildingKind::Tower),
        has_scriptorium: caps.has(me, BuildingKind::Scriptorium),
    }
}

/// Optional single-card selection: an empty pick is elided, not sent as null.
fn card_args(card: Option<Card>) -> Vec<ActionArg> {
    card.into_iter().map(ActionArg::from).collect()
}

fn cards_args(cards: Vec<Card>) -> Vec<ActionArg> {
    cards.into_iter().map(ActionArg::from).collect()
}

/// Fixed three-slot build argument list; absent components stay as nulls.
fn build_args(choice: BuildChoice) -> Vec<ActionArg> {
    vec![
        ActionArg::slot(choice.building.map(|c| c.0)),
        ActionArg::slot(choice.material.map(|c| c.0)),
        ActionArg::slot(choice.site),
    ]
}
