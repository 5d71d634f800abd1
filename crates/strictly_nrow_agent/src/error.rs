//! Agent error types.

use derive_more::{Display, Error};
use strictly_nrow::BoardSize;

/// Error returned when the agent is asked to move on an unplayable board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum AgentError {
    /// The board is already won or full.
    #[display("No move to make: the board is already decided")]
    TerminalBoard,

    /// The board does not match the agent's size.
    #[display("Agent plays on {expected} but was given a {found} board")]
    SizeMismatch {
        /// Size the agent was built for.
        expected: BoardSize,
        /// Size of the board passed in.
        found: BoardSize,
    },

    /// The background search task panicked or was cancelled.
    #[display("Move search did not complete")]
    SearchAborted,
}
