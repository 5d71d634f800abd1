//! Board fullness and empty-cell enumeration.

use crate::{Board, Position};
use tracing::instrument;

/// Checks if the board is full (no empty cell remains).
///
/// A full board with no winner is a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// All empty cells in row-major order.
#[instrument(level = "trace", skip(board))]
pub fn empty_positions(board: &Board) -> Vec<Position> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(pos, _)| pos)
        .collect()
}
