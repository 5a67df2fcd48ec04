//! Domain layer: the client's view of one game and the pure logic over it.

pub mod capabilities;
pub mod cards;
pub mod classify;
pub mod rules;
pub mod snapshot;

#[cfg(test)]
mod tests_props_classify;

// Re-exports for ergonomics
pub use cards::{Card, Material, Role};
pub use snapshot::{Building, ExpectedAction, GameSnapshot, PlayerState};
