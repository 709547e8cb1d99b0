//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Enemy profile pools (data-driven via RON)
//! - Level layouts and their rooms (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod loaders;

pub use loaders::{ConfigLoader, ContentFactory, EnemyLoader, LevelData, LoadResult, MapLoader};
