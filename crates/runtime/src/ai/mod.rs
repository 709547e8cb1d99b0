//! Behavior-tree AI for enemies.
//!
//! Every enemy owns one tree built from its profile by [`build_tree`]. The
//! tree reads the level through a [`BrainContext`] and publishes its chosen
//! step under [`NEXT_MOVEMENT`]; it never mutates the grid.

pub mod brain;
pub mod context;
pub mod nodes;

pub use brain::{EnemyBrain, build_tree};
pub use context::{Brain, BrainContext, NEXT_MOVEMENT, Roster};
pub use nodes::{GoRandomPosition, GoToTarget, WaitTurn};
