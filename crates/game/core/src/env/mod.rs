//! Services and configuration the core consumes: the grid, the seeded
//! random source and enemy profiles.
pub mod map;
pub mod npc;
pub mod rng;

pub use map::{GridError, LevelGrid, MapDimensions};
pub use npc::{EnemyData, Pathing, WaitPolicy};
pub use rng::{LevelRandom, RandomSource};
