//! The ways applying a move can fail.

use crate::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why an on-board move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IllegalReason {
    /// The cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The round has already been won or drawn.
    #[display("game is already over")]
    GameOver,
}

/// Error that can occur when applying a move.
///
/// `OutOfBounds` means the coordinates are wrong; `IllegalMove` means the
/// coordinates are fine but the game state forbids the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The position lies outside the grid.
    #[display("Position {position} is outside the {side}x{side} board")]
    OutOfBounds {
        /// Requested position.
        position: Position,
        /// Side length of the board.
        side: usize,
    },

    /// The position is on the board but cannot be played.
    #[display("Illegal move at {position}: {reason}")]
    IllegalMove {
        /// Requested position.
        position: Position,
        /// Why the move was refused.
        reason: IllegalReason,
    },
}

impl MoveError {
    /// Position the failed move targeted.
    pub fn position(&self) -> Position {
        match self {
            MoveError::OutOfBounds { position, .. } | MoveError::IllegalMove { position, .. } => {
                *position
            }
        }
    }
}
