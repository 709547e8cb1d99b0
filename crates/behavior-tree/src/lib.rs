//! Lightweight behavior tree library optimized for turn-based games.
//!
//! This library provides a minimal, deterministic behavior tree implementation
//! designed for entities that make exactly one decision per game turn.
//!
//! - **No delta time**: Every tick completes immediately (turn-based semantics)
//! - **Running means "next turn"**: a node that is not done yet returns
//!   [`Status::Running`] and is simply evaluated again on the next turn
//! - **Persistent leaves**: `reset()` clears per-evaluation bookkeeping only;
//!   leaf counters survive across turns
//! - **Blackboard down, never up**: nodes receive the tree's [`Blackboard`]
//!   on every tick and never hold a reference to their parent
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Context`]: What a node sees during one evaluation
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - [`Tree`]: Root ownership, blackboard and the reset/evaluate cycle

pub mod behavior;
pub mod blackboard;
pub mod builder;
pub mod composite;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Context};
pub use blackboard::{Blackboard, BlackboardError, BlackboardKey};
pub use composite::{Selector, Sequence};
pub use status::Status;
pub use tree::{Tree, TreeError};
