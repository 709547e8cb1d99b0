//! Movement intents produced by AI and applied by the turn scheduler.
pub mod movement;

pub use movement::Movement;
