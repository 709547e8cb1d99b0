//! Level layout loader.
//!
//! Layouts are authored as character maps (see [`Level::from_ascii`]) with
//! the room rectangles listed alongside. Generating layouts is not this
//! crate's job; it only reads finished ones.

use std::path::Path;

use game_core::{Level, LevelGrid, Room};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Level file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelDataRon {
    layout: String,
    #[serde(default)]
    rooms: Vec<Room>,
}

/// A parsed level and its rooms.
#[derive(Debug, Clone)]
pub struct LevelData {
    pub level: Level,
    pub rooms: Vec<Room>,
}

/// Loader for level data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a level from a RON file.
    pub fn load(path: &Path) -> LoadResult<LevelData> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a level from RON text.
    ///
    /// Every room must lie inside the layout.
    pub fn parse(content: &str) -> LoadResult<LevelData> {
        let data: LevelDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let level = Level::from_ascii(&data.layout);
        for room in &data.rooms {
            if let Some(outside) = room.cells().find(|&cell| !level.contains(cell)) {
                anyhow::bail!("Room {:?} extends outside the layout at {}", room, outside);
            }
        }

        Ok(LevelData {
            level,
            rooms: data.rooms,
        })
    }
}
