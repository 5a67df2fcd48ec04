//! Per-cycle action numbering and delivery.

use std::rc::Rc;

use tracing::{debug, error};

use crate::protocol::action::{ActionArg, ActionKind, NetworkAction};
use crate::protocol::transport::Transport;

/// Numbers a burst of related sends `base, base+1, ...` with no gaps.
///
/// One sequencer lives for exactly one dispatch cycle, so the counter
/// resets with every snapshot and prompt flows never see sequencing.
pub struct ActionSequencer {
    game_id: i64,
    base: u32,
    sent: u32,
    transport: Rc<dyn Transport>,
}

impl ActionSequencer {
    pub fn new(game_id: i64, base: u32, transport: Rc<dyn Transport>) -> Self {
        Self {
            game_id,
            base,
            sent: 0,
            transport,
        }
    }

    /// Next wire number: base plus sends already made this cycle.
    fn next_action_number(&mut self) -> u32 {
        let n = self.base + self.sent;
        self.sent += 1;
        n
    }

    /// Number one action and hand it to the transport. Delivery failures
    /// are logged, not retried; the counter still advances so later sends
    /// in the burst keep the numbers the flow decided on.
    pub fn send(&mut self, kind: ActionKind, args: Vec<ActionArg>) {
        let action = NetworkAction {
            game_id: self.game_id,
            action_number: self.next_action_number(),
            kind,
            args,
        };
        debug!(
            game_id = action.game_id,
            action_number = action.action_number,
            kind = action.kind.as_str(),
            "sending action"
        );
        if let Err(err) = self.transport.deliver(action) {
            error!(%err, "transport rejected action");
        }
    }

    /// Actions sent so far this cycle.
    pub fn sent(&self) -> u32 {
        self.sent
    }
}
