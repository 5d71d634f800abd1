//! Square board value type.

use crate::keys::{self, KeyError};
use crate::{BoardSize, Cell, Player, Position};
use serde::{Deserialize, Serialize};

/// Square N×N board.
///
/// Boards are values: every accepted move produces a new board and the
/// grid of one board is never shared with another. Cells are stored in
/// row-major order, so every row has exactly `size.side()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Builds a board from row-major cells, or `None` if the count is wrong.
    pub(crate) fn from_cells(size: BoardSize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == size.cell_count()).then_some(Self { size, cells })
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length of the grid.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        pos.index(self.side()).map(|i| self.cells[i])
    }

    /// Checks if the cell at the position exists and is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side())
    }

    /// Iterates every position with its cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let side = self.side();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / side, i % side), *cell))
    }

    /// Number of marks placed by a player.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Mark(player))
            .count()
    }

    /// Returns a copy with one cell marked. The receiver is left untouched.
    pub(crate) fn with_mark(&self, pos: Position, player: Player) -> Option<Board> {
        let index = pos.index(self.side())?;
        let mut next = self.clone();
        next.cells[index] = Cell::Mark(player);
        Some(next)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = self.side();
        let separator = vec!["-"; side].join("+");
        for (r, row) in self.rows().enumerate() {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Mark(player) => player.symbol().to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            f.write_str(&line)?;
            if r + 1 < side {
                write!(f, "\n{}\n", separator)?;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Board {
    type Error = KeyError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        keys::board_from_key(&key)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        keys::board_to_key(&board)
    }
}
