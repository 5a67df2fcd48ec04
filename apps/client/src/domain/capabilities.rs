//! Memoized per-snapshot capability flags.
//!
//! Several flows need the same building query; results are cached per
//! (seat, building) for the lifetime of one dispatch cycle. The cache
//! never outlives its snapshot, so staleness is impossible.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::cards::Material;
use crate::domain::rules::{BuildingKind, RulesLookup};
use crate::domain::snapshot::GameSnapshot;

pub struct Capabilities<'a, R: RulesLookup> {
    snapshot: &'a GameSnapshot,
    rules: &'a R,
    cache: RefCell<HashMap<(usize, BuildingKind), bool>>,
}

impl<'a, R: RulesLookup> Capabilities<'a, R> {
    pub fn new(snapshot: &'a GameSnapshot, rules: &'a R) -> Self {
        Self {
            snapshot,
            rules,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Active-building flag for one seat, at most one rules lookup per
    /// (seat, building) pair.
    pub fn has(&self, player_index: usize, building: BuildingKind) -> bool {
        *self
            .cache
            .borrow_mut()
            .entry((player_index, building))
            .or_insert_with(|| {
                self.rules
                    .has_active_building(self.snapshot, player_index, building)
            })
    }

    /// Materials demanded by a seat's revealed cards, in reveal order.
    /// Cards the deck does not know are skipped.
    pub fn demanded_materials(&self, player_index: usize) -> Vec<Material> {
        self.snapshot
            .players
            .get(player_index)
            .map(|p| {
                p.revealed
                    .iter()
                    .filter_map(|c| self.rules.card_material(c))
                    .collect()
            })
            .unwrap_or_default()
    }
}
