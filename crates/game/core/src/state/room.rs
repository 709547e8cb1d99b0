use crate::state::Position;

/// Axis-aligned rectangle of walkable room interior.
///
/// `(x, y)` is the top-left interior cell; walls and doors lie outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Room {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn area(&self) -> u32 {
        self.width * self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.y >= self.y
            && position.x < self.x + self.width as i32
            && position.y < self.y + self.height as i32
    }

    /// Interior cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (x0, y0) = (self.x, self.y);
        let (w, h) = (self.width as i32, self.height as i32);
        (y0..y0 + h).flat_map(move |y| (x0..x0 + w).map(move |x| Position::new(x, y)))
    }
}
