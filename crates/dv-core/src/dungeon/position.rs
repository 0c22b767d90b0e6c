//! Map positions and the distance metric

use serde::{Deserialize, Serialize};

/// The eight compass offsets, clockwise from north
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// A tile position on the current floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Approximate distance: the longer axis plus half the shorter one
    pub const fn distance(&self, other: &Position) -> i32 {
        let dx = (self.x as i32 - other.x as i32).abs();
        let dy = (self.y as i32 - other.y as i32).abs();
        if dy > dx { dy + (dx >> 1) } else { dx + (dy >> 1) }
    }

    /// Check if adjacent (including diagonals)
    pub const fn is_adjacent(&self, other: &Position) -> bool {
        let dx = (self.x as i32 - other.x as i32).abs();
        let dy = (self.y as i32 - other.y as i32).abs();
        dx <= 1 && dy <= 1 && (dx > 0 || dy > 0)
    }

    /// Position shifted by (dx, dy), or None if it leaves the coordinate range
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Position> {
        let x = i8::try_from(self.x as i32 + dx).ok()?;
        let y = i8::try_from(self.y as i32 + dy).ok()?;
        Some(Position { x, y })
    }

    /// The eight surrounding positions, clockwise from north
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
