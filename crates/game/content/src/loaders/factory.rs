//! Content factory for loading every data file of a run.

use std::path::PathBuf;
use std::sync::Arc;

use game_core::{EnemyData, GameConfig};

use crate::loaders::{ConfigLoader, EnemyLoader, LevelData, LoadResult, MapLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enemies.ron
/// └── level.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the enemy profile pool from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<Arc<EnemyData>>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load the level layout from `level.ron`.
    pub fn load_level(&self) -> LoadResult<LevelData> {
        MapLoader::load(&self.data_dir.join("level.ron"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_loads() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));

        let config = factory.load_config().unwrap();
        let pool = factory.load_enemies().unwrap();
        let level = factory.load_level().unwrap();

        assert!(!pool.is_empty());
        assert!(!level.rooms.is_empty());
        assert!(config.turns > 0);
    }
}
