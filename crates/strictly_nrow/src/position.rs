//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A cell coordinate, 0-indexed from the top-left corner.
///
/// Positions are not tied to a board size; validity is checked by
/// [`RuleEngine::is_valid_position`](crate::RuleEngine::is_valid_position).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Steps by a signed offset, returning `None` when leaving the grid.
    pub(crate) fn step(self, (dr, dc): (isize, isize), side: usize) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < side && col < side).then_some(Position { row, col })
    }

    /// Row-major index on a grid with the given side.
    pub(crate) fn index(self, side: usize) -> Option<usize> {
        (self.row < side && self.col < side).then_some(self.row * side + self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
