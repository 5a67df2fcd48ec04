//! Static game knowledge the dispatcher consults: which buildings a seat
//! has active, and what material a card is printed on. Kept behind a
//! trait so tests can script or count lookups.

use std::collections::HashMap;

use crate::domain::cards::{Card, Material};
use crate::domain::snapshot::GameSnapshot;

/// Buildings whose active effects change what a prompt flow offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingKind {
    Palace,
    Circus,
    Dock,
    Basilica,
    Atrium,
    Road,
    Tower,
    Scriptorium,
    Archway,
    Bridge,
    Coliseum,
    Palisade,
    Wall,
}

impl BuildingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingKind::Palace => "Palace",
            BuildingKind::Circus => "Circus",
            BuildingKind::Dock => "Dock",
            BuildingKind::Basilica => "Basilica",
            BuildingKind::Atrium => "Atrium",
            BuildingKind::Road => "Road",
            BuildingKind::Tower => "Tower",
            BuildingKind::Scriptorium => "Scriptorium",
            BuildingKind::Archway => "Archway",
            BuildingKind::Bridge => "Bridge",
            BuildingKind::Coliseum => "Coliseum",
            BuildingKind::Palisade => "Palisade",
            BuildingKind::Wall => "Wall",
        }
    }
}

pub trait RulesLookup {
    /// Does the seat at `player_index` have an active building of this kind?
    fn has_active_building(
        &self,
        snapshot: &GameSnapshot,
        player_index: usize,
        building: BuildingKind,
    ) -> bool;

    /// Material printed on a card, if the deck knows the card.
    fn card_material(&self, card: &Card) -> Option<Material>;
}

/// Rules answered from the snapshot's own building lists plus a deck
/// manifest mapping card names to materials.
#[derive(Debug, Default)]
pub struct StandardRules {
    deck: HashMap<String, Material>,
}

impl StandardRules {
    pub fn new(deck: impl IntoIterator<Item = (String, Material)>) -> Self {
        Self {
            deck: deck.into_iter().collect(),
        }
    }
}

impl RulesLookup for StandardRules {
    fn has_active_building(
        &self,
        snapshot: &GameSnapshot,
        player_index: usize,
        building: BuildingKind,
    ) -> bool {
        snapshot.players.get(player_index).is_some_and(|p| {
            p.buildings
                .iter()
                .any(|b| b.active && b.name == building.as_str())
        })
    }

    fn card_material(&self, card: &Card) -> Option<Material> {
        self.deck.get(card.as_str()).copied()
    }
}
