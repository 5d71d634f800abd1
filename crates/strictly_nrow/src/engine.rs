//! Rule engine for N-in-a-row.

use crate::action::{IllegalReason, MoveError};
use crate::keys::{self, KeyError};
use crate::rules;
use crate::{Board, BoardSize, Cell, Player, Position, WinCondition};
use tracing::{debug, instrument};

/// Stateless rule engine for one board size.
///
/// The engine holds no game history; every operation takes an explicit
/// board. Boards passed in are expected to have been created by an engine
/// of the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleEngine {
    size: BoardSize,
    win_length: usize,
}

impl RuleEngine {
    /// Creates an engine for the given board size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            win_length: size.win_length(),
        }
    }

    /// Board size this engine plays on.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Run length required to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Creates an empty board.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn create_empty_board(&self) -> Board {
        Board::new(self.size)
    }

    /// Checks that a position lies on the grid.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.row < self.size.side() && pos.col < self.size.side()
    }

    /// Checks that a position lies on the grid and its cell is empty.
    pub fn is_valid_move(&self, board: &Board, pos: Position) -> bool {
        self.is_valid_position(pos) && board.is_empty(pos)
    }

    /// Places a mark, returning the new board.
    ///
    /// The input board is never modified.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if the position is off the grid.
    /// - [`MoveError::IllegalMove`] if the cell is already occupied.
    #[instrument(level = "trace", skip(self, board))]
    pub fn apply_move(
        &self,
        board: &Board,
        pos: Position,
        player: Player,
    ) -> Result<Board, MoveError> {
        let out_of_bounds = MoveError::OutOfBounds {
            position: pos,
            side: self.size.side(),
        };

        if !self.is_valid_position(pos) {
            return Err(out_of_bounds);
        }

        match board.get(pos) {
            Some(Cell::Empty) => board.with_mark(pos, player).ok_or(out_of_bounds),
            Some(Cell::Mark(_)) => Err(MoveError::IllegalMove {
                position: pos,
                reason: IllegalReason::Occupied,
            }),
            None => Err(out_of_bounds),
        }
    }

    /// Checks if no empty cell remains.
    pub fn is_board_full(&self, board: &Board) -> bool {
        rules::is_full(board)
    }

    /// All empty cells in row-major order.
    pub fn empty_positions(&self, board: &Board) -> Vec<Position> {
        rules::empty_positions(board)
    }

    /// Finds the first winning run in scan order.
    ///
    /// See [`rules::check_win`] for the scan order.
    pub fn check_win(&self, board: &Board) -> Option<WinCondition> {
        rules::check_win(board)
    }

    /// Heuristic score of the board for `perspective`.
    pub fn evaluate(&self, board: &Board, perspective: Player) -> f64 {
        rules::evaluate(board, perspective)
    }

    /// Static positional score used for move ordering.
    pub fn move_score(&self, pos: Position) -> f64 {
        rules::move_score(self.size, pos)
    }

    /// Empty cells, strongest-looking first.
    #[instrument(skip(self, board))]
    pub fn ordered_moves(&self, board: &Board) -> Vec<Position> {
        let moves = rules::ordered_moves(board);
        debug!(count = moves.len(), first = ?moves.first(), "Ordered candidate moves");
        moves
    }

    /// Flattens a board into its memoization key.
    pub fn board_to_key(&self, board: &Board) -> String {
        keys::board_to_key(board)
    }

    /// Rebuilds a board from its key.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyError`] if the key is malformed.
    pub fn board_from_key(&self, key: &str) -> Result<Board, KeyError> {
        keys::board_from_key(key)
    }

    /// Formats a position as `row,col`.
    pub fn position_to_key(&self, pos: Position) -> String {
        keys::position_to_key(pos)
    }

    /// Parses a `row,col` key.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyError`] if the key is malformed.
    pub fn position_from_key(&self, key: &str) -> Result<Position, KeyError> {
        keys::position_from_key(key)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_derives_win_length() {
        assert_eq!(RuleEngine::new(BoardSize::Five).win_length(), 4);
        assert_eq!(RuleEngine::default().size(), BoardSize::Three);
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let engine = RuleEngine::new(BoardSize::Three);
        let board = engine.create_empty_board();
        let err = engine
            .apply_move(&board, Position::new(0, 3), Player::X)
            .unwrap_err();
        assert_eq!(
            err,
            MoveError::OutOfBounds {
                position: Position::new(0, 3),
                side: 3
            }
        );
    }

    #[test]
    fn test_apply_move_occupied() {
        let engine = RuleEngine::new(BoardSize::Three);
        let board = engine
            .apply_move(&engine.create_empty_board(), Position::new(1, 1), Player::X)
            .unwrap();
        let err = engine
            .apply_move(&board, Position::new(1, 1), Player::O)
            .unwrap_err();
        assert!(matches!(
            err,
            MoveError::IllegalMove {
                reason: IllegalReason::Occupied,
                ..
            }
        ));
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_valid_move_checks() {
        let engine = RuleEngine::new(BoardSize::Four);
        let board = engine.create_empty_board();
        assert!(engine.is_valid_move(&board, Position::new(3, 3)));
        assert!(!engine.is_valid_move(&board, Position::new(4, 0)));
    }
}
