use bitflags::bitflags;

bitflags! {
    /// Per-cell layer flags.
    ///
    /// A cell can carry several layers at once: an `ENEMY` spawn mark lives
    /// on top of `FLOOR`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Tile: u8 {
        const FLOOR = 1 << 0;
        const WALL = 1 << 1;
        const DOOR = 1 << 2;
        /// Enemy spawn point chosen during room population.
        const ENEMY = 1 << 3;
        /// Player spawn point.
        const PLAYER = 1 << 4;
    }
}

impl Tile {
    /// Walls block; floors and doors can be stood on.
    pub fn is_passable(self) -> bool {
        !self.contains(Tile::WALL) && self.intersects(Tile::FLOOR | Tile::DOOR)
    }
}
