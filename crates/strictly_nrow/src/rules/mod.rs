//! Game rules for N-in-a-row.
//!
//! Pure functions over [`Board`](crate::Board) values. Rules are kept apart
//! from board storage so the engine and the search can share them.

pub mod draw;
pub mod heuristic;
pub mod lines;
pub mod ordering;
pub mod win;

pub use draw::{empty_positions, is_full};
pub use heuristic::{evaluate, CENTER_BONUS, WIN_SCORE};
pub use lines::{scan_lines, Line};
pub use ordering::{move_score, ordered_moves};
pub use win::check_win;
