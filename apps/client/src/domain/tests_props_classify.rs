use proptest::prelude::*;

use crate::domain::classify::classify;
use crate::domain::snapshot::{ExpectedAction, GameSnapshot, PlayerState};

fn seat(name: String) -> PlayerState {
    PlayerState {
        name,
        buildings: Vec::new(),
        hand: Vec::new(),
        fountain_card: None,
        revealed: Vec::new(),
    }
}

proptest! {
    /// Classification is a pure function of snapshot plus user name:
    /// repeated calls agree, the seat matches by name, and the turn flag
    /// is exactly "active index equals local index".
    #[test]
    fn classify_is_pure_and_consistent(
        local_seat in 0usize..5,
        n_players in 1usize..6,
        active in 0usize..6,
        game_over in any::<bool>(),
    ) {
        let local_seat = local_seat % n_players;
        let active = active % n_players;
        let players: Vec<PlayerState> = (0..n_players)
            .map(|i| seat(if i == local_seat { "alice".to_string() } else { format!("bot{i}") }))
            .collect();
        let snapshot = GameSnapshot {
            game_id: 1,
            action_number: 0,
            active_player_index: active,
            players,
            winners: game_over.then(|| vec!["alice".to_string()]),
            expected_action: ExpectedAction::LeadOrThinker,
            pool: Vec::new(),
            role_led: None,
            legionary_count: None,
            legionary_player_index: None,
            oot_allowed: false,
        };

        let first = classify(&snapshot, "alice").unwrap();
        let second = classify(&snapshot, "alice").unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.local_player_index, local_seat);
        prop_assert_eq!(first.is_game_over, game_over);
        prop_assert_eq!(first.is_local_turn, active == local_seat);
    }
}
