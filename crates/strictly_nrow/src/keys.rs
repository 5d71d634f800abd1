//! Compact string keys for boards and positions.
//!
//! Keys are meant for memoization tables and log lines. A board key is one
//! character per cell in row-major order (`X`, `O`, or `_` for empty); a
//! position key is `row,col`.

use crate::{Board, BoardSize, Cell, Player, Position};
use derive_more::{Display, Error};
use tracing::instrument;

/// Placeholder character for an empty cell.
pub const EMPTY_SYMBOL: char = '_';

/// Error parsing a board or position key.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum KeyError {
    /// Key length does not match any board size.
    #[display("Board key has {_0} cells (expected 9, 16 or 25)")]
    BadLength(#[error(not(source))] usize),

    /// Key contains a character that is not a cell symbol.
    #[display("Unexpected character {symbol:?} at cell {index}")]
    BadSymbol {
        /// Offending character.
        symbol: char,
        /// Row-major cell index.
        index: usize,
    },

    /// Position key is not `row,col`.
    #[display("Malformed position key {_0:?}")]
    BadPosition(#[error(not(source))] String),
}

/// Flattens a board into its key.
pub fn board_to_key(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Mark(player) => player.symbol(),
        })
        .collect()
}

/// Rebuilds a board from its key. The board size is inferred from the length.
#[instrument]
pub fn board_from_key(key: &str) -> Result<Board, KeyError> {
    let count = key.chars().count();
    let size = BoardSize::from_cell_count(count).ok_or(KeyError::BadLength(count))?;

    let cells = key
        .chars()
        .enumerate()
        .map(|(index, symbol)| match symbol {
            EMPTY_SYMBOL => Ok(Cell::Empty),
            'X' => Ok(Cell::Mark(Player::X)),
            'O' => Ok(Cell::Mark(Player::O)),
            _ => Err(KeyError::BadSymbol { symbol, index }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Board::from_cells(size, cells).ok_or(KeyError::BadLength(count))
}

/// Formats a position as `row,col`.
pub fn position_to_key(pos: Position) -> String {
    format!("{},{}", pos.row, pos.col)
}

/// Parses a `row,col` key. Bounds are not checked.
#[instrument]
pub fn position_from_key(key: &str) -> Result<Position, KeyError> {
    let bad = || KeyError::BadPosition(key.to_string());
    let (row, col) = key.split_once(',').ok_or_else(bad)?;
    let row = row.trim().parse().map_err(|_| bad())?;
    let col = col.trim().parse().map_err(|_| bad())?;
    Ok(Position::new(row, col))
}
