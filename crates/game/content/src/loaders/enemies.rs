//! Enemy profile pool loader.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use game_core::EnemyData;

use crate::loaders::{LoadResult, read_file};

/// Loader for the enemy profile pool from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load enemy profiles from a RON file.
    ///
    /// RON format: `Vec<EnemyData>`
    ///
    /// The pool must be non-empty and profile names must be unique.
    pub fn load(path: &Path) -> LoadResult<Vec<Arc<EnemyData>>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse enemy profiles from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Arc<EnemyData>>> {
        let profiles: Vec<EnemyData> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy pool RON: {}", e))?;

        if profiles.is_empty() {
            anyhow::bail!("Enemy pool is empty");
        }

        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.name.as_str()) {
                anyhow::bail!("Duplicate enemy profile '{}'", profile.name);
            }
        }

        Ok(profiles.into_iter().map(Arc::new).collect())
    }
}
