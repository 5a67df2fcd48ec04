//! Concrete collaborators: console prompt flows and stdout transport.

pub mod console;

pub use console::{ConsolePrompts, ConsoleSurface, JsonLineTransport};
