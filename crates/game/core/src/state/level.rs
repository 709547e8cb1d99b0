//! Concrete rectangular level grid.

use crate::env::{GridError, LevelGrid, MapDimensions};
use crate::state::{EntityId, Position, Tile};

/// Tile layers plus an occupancy layer.
///
/// Tile layers describe the static layout and spawn marks. The occupancy
/// layer records which entity stands where and is only changed through
/// [`Level::place`], [`Level::relocate`] and [`Level::vacate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    dimensions: MapDimensions,
    tiles: Vec<Tile>,
    occupants: Vec<Option<EntityId>>,
}

impl Level {
    /// Creates a level with no tile layers anywhere (nothing is passable).
    pub fn new(width: u32, height: u32) -> Self {
        let cells = width as usize * height as usize;
        Self {
            dimensions: MapDimensions::new(width, height),
            tiles: vec![Tile::empty(); cells],
            occupants: vec![None; cells],
        }
    }

    /// Parses a character map, one row per line.
    ///
    /// `#` wall, `.` floor, `+` door, `@` floor with a player spawn mark,
    /// `e` floor with an enemy spawn mark, anything else is empty. Rows
    /// shorter than the widest one are padded with empty cells.
    pub fn from_ascii(layout: &str) -> Self {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim_end)
            .filter(|row| !row.is_empty())
            .collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let mut level = Self::new(width, rows.len() as u32);

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let tile = match ch {
                    '#' => Tile::WALL,
                    '.' => Tile::FLOOR,
                    '+' => Tile::DOOR,
                    '@' => Tile::FLOOR | Tile::PLAYER,
                    'e' => Tile::FLOOR | Tile::ENEMY,
                    _ => Tile::empty(),
                };
                let position = Position::new(x as i32, y as i32);
                if let Some(index) = level.dimensions.index(position) {
                    level.tiles[index] = tile;
                }
            }
        }
        level
    }

    /// Removes `tile` layers at `position`.
    pub fn remove(&mut self, position: Position, tile: Tile) -> Result<(), GridError> {
        let index = self.index(position)?;
        self.tiles[index].remove(tile);
        Ok(())
    }

    /// Positions carrying every layer in `tile`, row-major.
    pub fn positions_with(&self, tile: Tile) -> impl Iterator<Item = Position> + '_ {
        let width = self.dimensions.width as usize;
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.contains(tile))
            .map(move |(i, _)| Position::new((i % width) as i32, (i / width) as i32))
    }

    /// Puts `entity` on a passable, unoccupied cell.
    pub fn place(&mut self, entity: EntityId, position: Position) -> Result<(), GridError> {
        let index = self.index(position)?;
        if !self.tiles[index].is_passable() {
            return Err(GridError::Blocked(position));
        }
        if let Some(occupant) = self.occupants[index] {
            return Err(GridError::Occupied { position, occupant });
        }
        self.occupants[index] = Some(entity);
        Ok(())
    }

    /// Moves whoever stands on `from` to `to`.
    ///
    /// Either both cells change or neither does.
    pub fn relocate(&mut self, from: Position, to: Position) -> Result<EntityId, GridError> {
        let from_index = self.index(from)?;
        let to_index = self.index(to)?;
        let entity = self.occupants[from_index].ok_or(GridError::Vacant(from))?;
        if !self.tiles[to_index].is_passable() {
            return Err(GridError::Blocked(to));
        }
        if let Some(occupant) = self.occupants[to_index] {
            return Err(GridError::Occupied {
                position: to,
                occupant,
            });
        }
        self.occupants[from_index] = None;
        self.occupants[to_index] = Some(entity);
        Ok(entity)
    }

    /// Clears the occupant at `position`, returning it.
    pub fn vacate(&mut self, position: Position) -> Option<EntityId> {
        let index = self.dimensions.index(position)?;
        self.occupants[index].take()
    }

    /// Renders the level back to characters; occupants are drawn as `E`
    /// (enemy) and `P` (player).
    pub fn render(&self) -> String {
        let mut out = String::new();
        for y in 0..self.dimensions.height as i32 {
            for x in 0..self.dimensions.width as i32 {
                let position = Position::new(x, y);
                let ch = match self.occupant(position) {
                    Some(id) if id.is_player() => 'P',
                    Some(_) => 'E',
                    None => {
                        let tile = self.tile(position);
                        if tile.contains(Tile::WALL) {
                            '#'
                        } else if tile.contains(Tile::DOOR) {
                            '+'
                        } else if tile.contains(Tile::ENEMY) {
                            'e'
                        } else if tile.contains(Tile::FLOOR) {
                            '.'
                        } else {
                            ' '
                        }
                    }
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, position: Position) -> Result<usize, GridError> {
        self.dimensions
            .index(position)
            .ok_or(GridError::OutOfBounds(position))
    }
}

impl LevelGrid for Level {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Tile {
        self.dimensions
            .index(position)
            .map(|i| self.tiles[i])
            .unwrap_or_default()
    }

    fn occupant(&self, position: Position) -> Option<EntityId> {
        self.dimensions
            .index(position)
            .and_then(|i| self.occupants[i])
    }

    fn add(&mut self, position: Position, tile: Tile) -> Result<(), GridError> {
        let index = self.index(position)?;
        self.tiles[index].insert(tile);
        Ok(())
    }
}
