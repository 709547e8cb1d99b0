use crate::state::Position;

/// A single-step movement intent.
///
/// `None` is an explicit "stay put" and is never applied to the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Movement {
    /// The four real steps in canonical order: vertical first, then horizontal.
    pub const STEPS: [Movement; 4] = [
        Movement::Up,
        Movement::Down,
        Movement::Left,
        Movement::Right,
    ];

    /// Unit delta; rows grow downward so `Up` is `(0, -1)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Movement::None => (0, 0),
            Movement::Up => (0, -1),
            Movement::Down => (0, 1),
            Movement::Left => (-1, 0),
            Movement::Right => (1, 0),
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Movement::None)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Movement::Left | Movement::Right)
    }

    /// Swaps `Left` and `Right`; vertical steps are unchanged.
    pub fn mirrored(self) -> Self {
        match self {
            Movement::Left => Movement::Right,
            Movement::Right => Movement::Left,
            other => other,
        }
    }

    /// Where this step leads from `origin`.
    pub fn destination_from(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn steps_move_exactly_one_cell() {
        let origin = Position::new(3, 3);
        for step in Movement::STEPS {
            assert_eq!(step.destination_from(origin).manhattan(origin), 1);
        }
        assert_eq!(Movement::None.destination_from(origin), origin);
    }

    #[test]
    fn mirroring_only_touches_horizontal_steps() {
        for movement in Movement::iter() {
            let mirrored = movement.mirrored();
            assert_eq!(mirrored.mirrored(), movement);
            assert_eq!(mirrored.is_horizontal(), movement.is_horizontal());
            if !movement.is_horizontal() {
                assert_eq!(mirrored, movement);
            }
        }
        assert_eq!(Movement::Left.mirrored(), Movement::Right);
    }

    #[test]
    fn up_points_to_previous_row() {
        assert_eq!(
            Movement::Up.destination_from(Position::new(0, 5)),
            Position::new(0, 4)
        );
        assert_eq!(Movement::Right.to_string(), "Right");
    }
}
