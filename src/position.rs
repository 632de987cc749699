//! Board coordinates with occupancy and hit tracking.

use core::fmt;
use core::hash::{Hash, Hasher};

/// A cell on the board.
///
/// Equality (and hashing) only look at `row` and `column`, so a freshly
/// built target cell compares equal to the matching cell a ship owns even
/// after that cell was hit.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    row: i32,
    column: i32,
    occupied: bool,
    hit: bool,
}

impl Position {
    /// New unoccupied, unhit cell at (`row`, `column`).
    pub const fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            occupied: false,
            hit: false,
        }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    /// Chebyshev distance of at most one; a cell is adjacent to itself.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.column.abs_diff(other.column) <= 1
    }

    /// Mark the cell as occupied by a ship. Idempotent.
    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    /// Mark the cell as hit. Idempotent.
    pub fn shoot(&mut self) {
        self.hit = true;
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Position::new(row, column)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {{ row: {}, column: {}, occupied: {}, hit: {} }}",
            self.row, self.column, self.occupied, self.hit
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
