//! Strictly N-in-a-row - pure game rules.
//!
//! Square boards of side 3, 4 or 5 where a run of
//! [`BoardSize::win_length`] identical marks along a row, column or
//! diagonal wins.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Cell`], [`Board`], [`Position`], [`WinCondition`]
//! - **Rules**: pure functions in [`rules`] (win detection, heuristics, ordering)
//! - **Engine**: [`RuleEngine`], the call surface used by agents and orchestrators
//! - **Keys**: compact string forms of boards and positions in [`keys`]
//!
//! # Example
//!
//! ```
//! use strictly_nrow::{BoardSize, Player, Position, RuleEngine};
//!
//! let engine = RuleEngine::new(BoardSize::Three);
//! let board = engine.create_empty_board();
//! let board = engine.apply_move(&board, Position::new(1, 1), Player::X)?;
//! assert!(engine.check_win(&board).is_none());
//! # Ok::<(), strictly_nrow::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod position;
mod types;

pub mod keys;
pub mod rules;

pub use action::{IllegalReason, MoveError};
pub use board::Board;
pub use engine::RuleEngine;
pub use keys::KeyError;
pub use position::Position;
pub use types::{BoardSize, BoardSizeError, Cell, LineKind, Player, WinCondition};
