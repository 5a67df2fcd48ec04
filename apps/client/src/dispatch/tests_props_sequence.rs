use std::rc::Rc;

use proptest::prelude::*;

use crate::dispatch::test_support::{
    dispatcher_for, make_snapshot, two_seats, Decision, MakeSnapshotArgs, RecordingTransport,
    ScriptedFlows,
};
use crate::domain::snapshot::ExpectedAction;
use crate::protocol::action::{ActionArg, ActionKind};

proptest! {
    /// A burst of N follow-role decisions is numbered base..base+N with
    /// no gaps or repeats, in decision order.
    #[test]
    fn follow_role_bursts_are_gap_free(base in 0u32..10_000, n in 1usize..8) {
        let decisions: Vec<_> = (0..n)
            .map(|i| (ActionKind::FollowRole, vec![ActionArg::Number(i as i64)]))
            .collect();
        let transport = RecordingTransport::new();
        let flows = ScriptedFlows::with(Decision::Repeated(decisions));
        let mut dispatcher = dispatcher_for(flows, Rc::clone(&transport));
        let snapshot = make_snapshot(
            two_seats(),
            MakeSnapshotArgs {
                expected_action: ExpectedAction::FollowRole,
                action_number: base,
                ..Default::default()
            },
        );

        dispatcher.handle_snapshot(Some(&snapshot), &mut ()).unwrap();

        let actions = transport.actions();
        prop_assert_eq!(actions.len(), n);
        for (i, action) in actions.iter().enumerate() {
            prop_assert_eq!(action.action_number, base + i as u32);
            prop_assert_eq!(&action.args, &vec![ActionArg::Number(i as i64)]);
        }
    }

    /// The composite lead-or-thinker decision always produces exactly two
    /// sends at base and base+1, whatever the base.
    #[test]
    fn composite_decision_is_always_two_sends(base in 0u32..10_000, thinker in any::<bool>()) {
        let kind = if thinker { ActionKind::ThinkerType } else { ActionKind::LeadRole };
        let transport = RecordingTransport::new();
        let flows = ScriptedFlows::with(Decision::Kinded(kind, Vec::new()));
        let mut dispatcher = dispatcher_for(flows, Rc::clone(&transport));
        let snapshot = make_snapshot(
            two_seats(),
            MakeSnapshotArgs {
                action_number: base,
                ..Default::default()
            },
        );

        dispatcher.handle_snapshot(Some(&snapshot), &mut ()).unwrap();

        let actions = transport.actions();
        prop_assert_eq!(actions.len(), 2);
        prop_assert_eq!(actions[0].kind, ActionKind::ThinkerOrLead);
        prop_assert_eq!(actions[0].args.clone(), vec![ActionArg::Bool(thinker)]);
        prop_assert_eq!(actions[0].action_number, base);
        prop_assert_eq!(actions[1].action_number, base + 1);
    }
}
