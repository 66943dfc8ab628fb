//! Headings the snake can travel in.

/// One of the four directions of travel on the grid.
///
/// Screen coordinates are used: `y` grows downwards, so `Up` is `(0, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards the last column.
    Right,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// `true` for `Left` and `Right`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    /// `true` for `Up` and `Down`.
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// The direction pointing the other way.
    pub fn inverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// Whether a snake heading `self` may turn to `other`.
    ///
    /// Only turns onto the perpendicular axis are legal; this rules out
    /// both reversing into the body and repeating the current axis.
    pub fn can_turn_to(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    /// Unit step `(dx, dy)` for one cell of movement.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_partition_directions() {
        for dir in Direction::ALL {
            assert_ne!(dir.is_horizontal(), dir.is_vertical());
            assert_eq!(dir.inverse().is_horizontal(), dir.is_horizontal());
            assert_eq!(dir.inverse().inverse(), dir);
        }
    }

    #[test]
    fn only_perpendicular_turns_are_allowed() {
        for dir in Direction::ALL {
            assert!(!dir.can_turn_to(dir));
            assert!(!dir.can_turn_to(dir.inverse()));
        }
        assert!(Direction::Up.can_turn_to(Direction::Left));
        assert!(Direction::Right.can_turn_to(Direction::Down));
    }

    #[test]
    fn deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
            let (ix, iy) = dir.inverse().delta();
            assert_eq!((dx + ix, dy + iy), (0, 0));
        }
        assert_eq!(Direction::Up.delta(), (0, -1));
    }
}
