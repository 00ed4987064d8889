use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Axis a direction moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Returns true if both directions move along the same axis.
    ///
    /// Covers both the reversal (up/down) and the no-op (up/up) case.
    pub fn is_parallel(&self, other: Direction) -> bool {
        self.axis() == other.axis()
    }

    /// Returns the delta (dx, dy) for moving in this direction.
    /// Screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
