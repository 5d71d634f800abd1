//! Static move ordering.

use super::draw::empty_positions;
use crate::{Board, BoardSize, Position};
use tracing::instrument;

const CENTER_WEIGHT: f64 = 0.1;
const CORNER_BONUS: f64 = 0.2;

/// Positional score of a cell, independent of the marks on the board.
///
/// Cells nearer the center score higher; on 3×3 boards corners get a flat
/// bonus that ties them with the center.
pub fn move_score(size: BoardSize, pos: Position) -> f64 {
    let side = size.side();
    let distance = pos.manhattan(size.center());
    let mut score = (side as f64 - distance as f64) * CENTER_WEIGHT;

    if size == BoardSize::Three && size.corners().contains(&pos) {
        score += CORNER_BONUS;
    }

    score
}

/// Empty cells sorted by descending [`move_score`].
///
/// The sort is stable, so equal scores keep row-major order.
#[instrument(level = "trace", skip(board))]
pub fn ordered_moves(board: &Board) -> Vec<Position> {
    let size = board.size();
    let mut moves = empty_positions(board);
    moves.sort_by(|a, b| move_score(size, *b).total_cmp(&move_score(size, *a)));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::board_from_key;

    #[test]
    fn test_three_by_three_order() {
        let board = board_from_key("_________").unwrap();
        assert_eq!(
            ordered_moves(&board),
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(1, 1),
                Position::new(2, 0),
                Position::new(2, 2),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_center_first_on_five() {
        let board = board_from_key(&"_".repeat(25)).unwrap();
        let moves = ordered_moves(&board);
        assert_eq!(moves[0], Position::new(2, 2));
        assert_eq!(moves.len(), 25);
        assert_eq!(moves.last(), Some(&Position::new(4, 4)));
    }

    #[test]
    fn test_occupied_cells_skipped() {
        let board = board_from_key("X___O____").unwrap();
        let moves = ordered_moves(&board);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Position::new(0, 2));
    }
}
