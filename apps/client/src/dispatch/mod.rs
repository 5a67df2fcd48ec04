//! The action dispatcher: snapshot in, at most one prompt flow engaged,
//! zero or more numbered network actions out.

pub mod dispatcher;
pub mod flows;
pub mod sequencer;

#[cfg(test)]
mod tests_props_sequence;

pub use dispatcher::Dispatcher;
pub use flows::PromptFlows;
pub use sequencer::ActionSequencer;
