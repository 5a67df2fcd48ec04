//! Wire types sent back to the server and the outbound delivery seam.

pub mod action;
pub mod transport;

#[cfg(test)]
mod tests_action;

pub use action::{ActionArg, ActionKind, NetworkAction};
pub use transport::Transport;
