//! Deterministic grid model shared by the AI runtime and content loaders.
//!
//! `game-core` defines the level grid, movement intents, enemy profiles, the
//! seeded random source and room population. It holds no AI logic; the
//! runtime drives entities against the types re-exported here.
pub mod action;
pub mod config;
pub mod env;
pub mod placement;
pub mod state;

pub use action::Movement;
pub use config::{GameConfig, PlacementRules};
pub use env::{
    EnemyData, GridError, LevelGrid, LevelRandom, MapDimensions, Pathing, RandomSource,
    WaitPolicy,
};
pub use placement::{enemy_target_count, is_clear_of_doors, legal_enemy_cells, place_enemies};
pub use state::{EntityId, Level, Position, Room, Tile};
