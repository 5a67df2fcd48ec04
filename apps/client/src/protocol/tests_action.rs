use crate::domain::cards::Card;
use crate::protocol::action::{ActionArg, ActionKind, NetworkAction};

#[test]
fn network_action_serializes_args_as_plain_scalars() {
    let action = NetworkAction {
        game_id: 42,
        action_number: 7,
        kind: ActionKind::Craftsman,
        args: vec![
            ActionArg::from("Shrine"),
            ActionArg::Null,
            ActionArg::Bool(true),
            ActionArg::Number(3),
        ],
    };

    let json = serde_json::to_string(&action).unwrap();
    assert_eq!(
        json,
        r#"{"game_id":42,"action_number":7,"kind":"CRAFTSMAN","args":["Shrine",null,true,3]}"#
    );
}

#[test]
fn network_action_round_trips() {
    let action = NetworkAction {
        game_id: 1,
        action_number: 0,
        kind: ActionKind::ThinkerOrLead,
        args: vec![ActionArg::Bool(true)],
    };

    let json = serde_json::to_string(&action).unwrap();
    let back: NetworkAction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, action);
}

#[test]
fn kind_wire_names_match_as_str() {
    for kind in [
        ActionKind::ThinkerOrLead,
        ActionKind::LeadRole,
        ActionKind::TakePoolCards,
    ] {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
    }
}

#[test]
fn card_argument_carries_the_card_name() {
    let arg = ActionArg::from(Card::from("Temple"));
    assert_eq!(arg, ActionArg::Text("Temple".to_string()));
}

#[test]
fn empty_slot_becomes_an_explicit_null() {
    assert_eq!(ActionArg::slot(None), ActionArg::Null);
    assert_eq!(
        ActionArg::slot(Some("Wood".to_string())),
        ActionArg::Text("Wood".to_string())
    );
}
