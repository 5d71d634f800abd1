//! Core domain types for N-in-a-row.

use crate::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used for this player in board keys and displays.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Parses a player symbol (case-insensitive).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Mark(Player),
}

impl Cell {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Side length of the square board.
///
/// Only 3, 4 and 5 are playable. The run length needed to win is derived
/// from the size and is not always equal to it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// 3×3, three in a row.
    #[default]
    #[display("3x3")]
    Three,
    /// 4×4, four in a row.
    #[display("4x4")]
    Four,
    /// 5×5, four in a row.
    #[display("5x5")]
    Five,
}

impl BoardSize {
    /// Side length of the grid.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// Number of cells on the grid.
    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Run length required to win on this board.
    pub fn win_length(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 4,
        }
    }

    /// Center cell (rounded toward the top-left on even sides).
    pub fn center(self) -> Position {
        let c = self.side() / 2;
        Position::new(c, c)
    }

    /// The four corners in fixed order: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(self) -> [Position; 4] {
        let last = self.side() - 1;
        [
            Position::new(0, 0),
            Position::new(0, last),
            Position::new(last, 0),
            Position::new(last, last),
        ]
    }

    /// Looks up the size whose grid has `count` cells.
    pub fn from_cell_count(count: usize) -> Option<Self> {
        match count {
            9 => Some(BoardSize::Three),
            16 => Some(BoardSize::Four),
            25 => Some(BoardSize::Five),
            _ => None,
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    #[instrument]
    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            other => Err(BoardSizeError { side: other }),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.side()
    }
}

/// Unsupported board side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unsupported board size {side} (expected 3, 4 or 5)")]
pub struct BoardSizeError {
    /// The rejected side length.
    pub side: usize,
}

/// Orientation of a scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Horizontal line.
    #[display("row")]
    Row,
    /// Vertical line.
    #[display("column")]
    Column,
    /// Either diagonal direction.
    #[display("diagonal")]
    Diagonal,
}

/// A winning run found on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinCondition {
    /// Owner of the run.
    pub player: Player,
    /// Exactly `win_length` positions, in scan order.
    pub positions: Vec<Position>,
    /// Orientation of the line the run lies on.
    pub line_kind: LineKind,
}

impl WinCondition {
    /// Checks whether the run covers the given position.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

impl std::fmt::Display for WinCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins on a {} through", self.player, self.line_kind)?;
        for pos in &self.positions {
            write!(f, " {}", pos)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_win_length_lookup() {
        assert_eq!(BoardSize::Three.win_length(), 3);
        assert_eq!(BoardSize::Four.win_length(), 4);
        assert_eq!(BoardSize::Five.win_length(), 4);
    }

    #[test]
    fn test_board_size_from_side() {
        for size in BoardSize::iter() {
            assert_eq!(BoardSize::try_from(size.side()), Ok(size));
        }
        assert_eq!(BoardSize::try_from(6), Err(BoardSizeError { side: 6 }));
    }

    #[test]
    fn test_corners_order() {
        assert_eq!(
            BoardSize::Four.corners(),
            [
                Position::new(0, 0),
                Position::new(0, 3),
                Position::new(3, 0),
                Position::new(3, 3)
            ]
        );
    }

    #[test]
    fn test_center_of_even_board() {
        assert_eq!(BoardSize::Four.center(), Position::new(2, 2));
    }
}
