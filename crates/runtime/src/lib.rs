//! Turn-based enemy AI runtime.
//!
//! This crate drives enemies on a [`game_core::Level`] with behavior trees.
//! Each turn the [`TurnScheduler`] walks the enemies in registration order,
//! asks each one for a step and applies it before the next enemy decides.
//!
//! Modules are organized by responsibility:
//! - [`ai`] builds enemy trees and hosts their leaf nodes
//! - [`entity`] and [`world`] hold per-entity and per-level state
//! - [`scheduler`] and [`events`] run turns and report what happened
//! - [`spawn`] turns room spawn marks into live enemies
pub mod ai;
pub mod entity;
pub mod errors;
pub mod events;
pub mod scheduler;
pub mod spawn;
pub mod world;

pub use ai::{Brain, BrainContext, EnemyBrain, NEXT_MOVEMENT, Roster, build_tree};
pub use entity::{EnemyEntity, Movable, Turnable};
pub use errors::{Result, RuntimeError};
pub use events::{TurnEvent, TurnReport};
pub use scheduler::{Intent, TurnScheduler};
pub use spawn::{populate_room, spawn_marked};
pub use world::World;
