#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod protocol;


// Re-exports for public API
pub use dispatch::dispatcher::Dispatcher;
pub use dispatch::flows::PromptFlows;
pub use dispatch::sequencer::ActionSequencer;
pub use domain::classify::{classify, Classification};
pub use domain::rules::{BuildingKind, RulesLookup, StandardRules};
pub use domain::snapshot::{ExpectedAction, GameSnapshot, PlayerState};
pub use errors::ClientError;
pub use protocol::action::{ActionArg, ActionKind, NetworkAction};
pub use protocol::transport::Transport;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
