//! Leaf nodes for enemy behavior trees.
//!
//! - [`timing`]: turn-counting leaves that gate a sequence
//! - [`movement`]: leaves that publish a step under
//!   [`NEXT_MOVEMENT`](crate::ai::NEXT_MOVEMENT)

pub mod movement;
pub mod timing;

pub use movement::{GoRandomPosition, GoToTarget, step_toward};
pub use timing::WaitTurn;
