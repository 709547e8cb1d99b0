//! Grid state: positions, tiles, rooms and the level itself.
pub mod common;
pub mod level;
pub mod room;
pub mod tile;

pub use common::{EntityId, Position};
pub use level::Level;
pub use room::Room;
pub use tile::Tile;
