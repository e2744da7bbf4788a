//! Board cells.
//!
//! The board is a fixed 9×9 grid. `x` runs left to right, `y` runs from
//! row 0 (First's home row) to row 8 (Second's home row).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of cells along each side of the board.
pub const BOARD_SIZE: u8 = 9;

/// Largest valid cell coordinate.
pub const BOARD_MAX: u8 = BOARD_SIZE - 1;

/// The four orthogonal unit steps.
pub const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A cell on the board. Both coordinates are always in `0..=8`.
///
/// Deserialization goes through the same range check as `checked`, so a
/// stored `{"x": 9, "y": 0}` is rejected rather than smuggled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    x: u8,
    y: u8,
}

/// Unchecked wire shape of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// Create a position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is larger than 8. Use `checked` for
    /// untrusted input.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x <= BOARD_MAX && y <= BOARD_MAX, "position out of bounds");
        Self { x, y }
    }

    /// Create a position from raw coordinates, `None` when off the board.
    #[must_use]
    pub fn checked(x: i32, y: i32) -> Option<Self> {
        let in_range = |v: i32| (0..i32::from(BOARD_SIZE)).contains(&v);
        if in_range(x) && in_range(y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// The cell displaced by `(dx, dy)`, or `None` if that falls off the board.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::checked(i32::from(self.x) + dx, i32::from(self.y) + dy)
    }

    /// Signed displacement from `self` to `other`.
    #[must_use]
    pub fn delta_to(self, other: Position) -> (i32, i32) {
        (
            i32::from(other.x) - i32::from(self.x),
            i32::from(other.y) - i32::from(self.y),
        )
    }

    /// Manhattan distance to another cell.
    #[must_use]
    pub fn manhattan(self, other: Position) -> u32 {
        let (dx, dy) = self.delta_to(other);
        dx.unsigned_abs() + dy.unsigned_abs()
    }

    /// Orthogonal neighbours that lie on the board.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Position; 4]> {
        ORTHOGONAL
            .iter()
            .filter_map(|&(dx, dy)| self.offset(dx, dy))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl TryFrom<RawPosition> for Position {
    type Error = crate::error::RuleViolation;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::checked(raw.x, raw.y).ok_or(crate::error::RuleViolation::OutOfBounds)
    }
}

impl From<Position> for RawPosition {
    fn from(pos: Position) -> Self {
        Self {
            x: i32::from(pos.x),
            y: i32::from(pos.y),
        }
    }
}
