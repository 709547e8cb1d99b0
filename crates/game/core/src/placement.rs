//! Room population: choosing enemy spawn cells.
//!
//! Legal cells are enterable room cells (passable, unoccupied) with no door
//! among their four orthogonal neighbours. A target count derived from the room area is
//! sampled from them uniformly without replacement; each chosen cell gets the
//! [`Tile::ENEMY`] layer.

use crate::config::PlacementRules;
use crate::env::{GridError, LevelGrid, RandomSource};
use crate::state::{Position, Room, Tile};

/// How many enemies a room asks for before capping by legal cells.
pub fn enemy_target_count(room: &Room, rules: &PlacementRules) -> usize {
    if rules.area_divisor == 0 {
        return 0;
    }
    let per_divisor = f64::from(room.area()) / f64::from(rules.area_divisor);
    (per_divisor * rules.density).ceil().max(0.0) as usize
}

/// Returns `true` if none of the four neighbours of `position` is a door.
pub fn is_clear_of_doors(grid: &impl LevelGrid, position: Position) -> bool {
    position
        .neighbors()
        .into_iter()
        .all(|neighbor| !grid.has_door(neighbor))
}

/// Room cells an enemy may spawn on, row-major.
pub fn legal_enemy_cells(room: &Room, grid: &impl LevelGrid) -> Vec<Position> {
    room.cells()
        .filter(|&cell| grid.can_enter(cell) && is_clear_of_doors(grid, cell))
        .collect()
}

/// Marks enemy spawn cells in `room` and returns them in the order chosen.
///
/// Consumes exactly one draw from `rng` per placed enemy and none when the
/// room has no legal cell.
pub fn place_enemies(
    room: &Room,
    grid: &mut impl LevelGrid,
    rng: &mut impl RandomSource,
    rules: &PlacementRules,
) -> Result<Vec<Position>, GridError> {
    let mut candidates = legal_enemy_cells(room, grid);
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let count = enemy_target_count(room, rules).min(candidates.len());
    let mut placed = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.pick_index(candidates.len());
        let cell = candidates.remove(index);
        grid.add(cell, Tile::ENEMY)?;
        placed.push(cell);
    }
    Ok(placed)
}
