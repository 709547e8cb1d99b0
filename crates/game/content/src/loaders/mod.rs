//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into `game-core`
//! types: enemy profiles, level layouts and the game configuration.

pub mod config;
pub mod enemies;
pub mod factory;
pub mod map;

pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::ContentFactory;
pub use map::{LevelData, MapLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
