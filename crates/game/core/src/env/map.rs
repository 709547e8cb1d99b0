use crate::state::{EntityId, Position, Tile};

/// Errors raised by grid mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),

    #[error("position {0} is not passable")]
    Blocked(Position),

    #[error("position {position} is already occupied by {occupant}")]
    Occupied {
        position: Position,
        occupant: EntityId,
    },

    #[error("no occupant at {0}")]
    Vacant(Position),
}

/// Grid service consumed by placement and AI.
///
/// Reads are infallible: a position outside the grid simply has no tiles,
/// no door and no occupant.
pub trait LevelGrid: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Tile layers at `position`, empty when out of bounds.
    fn tile(&self, position: Position) -> Tile;

    /// Entity currently standing at `position`.
    fn occupant(&self, position: Position) -> Option<EntityId>;

    /// Adds `tile` layers at `position`.
    fn add(&mut self, position: Position, tile: Tile) -> Result<(), GridError>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Returns true if every layer in `tile` is present at `position`.
    fn has(&self, position: Position, tile: Tile) -> bool {
        self.tile(position).contains(tile)
    }

    fn has_door(&self, position: Position) -> bool {
        self.has(position, Tile::DOOR)
    }

    fn is_passable(&self, position: Position) -> bool {
        self.tile(position).is_passable()
    }

    fn is_occupied(&self, position: Position) -> bool {
        self.occupant(position).is_some()
    }

    /// Passable and unoccupied.
    fn can_enter(&self, position: Position) -> bool {
        self.is_passable(position) && !self.is_occupied(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Row-major index of an in-bounds position.
    pub fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}
