//! Tiered computer opponent for N-in-a-row.
//!
//! [`DecisionAgent`] picks moves on a [`strictly_nrow::Board`] at one of
//! three [`Difficulty`] tiers:
//!
//! - **Easy** flips a coin between one-ply tactics and a random empty cell.
//! - **Medium** wins if it can, blocks if it must, and otherwise prefers the
//!   center, then the corners.
//! - **Hard** wins or blocks, then runs a depth-5 minimax.
//!
//! Before answering the agent pauses for a tier-dependent random duration
//! so play feels paced. The pause is a tokio timer; use
//! [`ThinkingPace::Instant`] to skip it.
//!
//! ```no_run
//! use strictly_nrow::{BoardSize, Player, RuleEngine};
//! use strictly_nrow_agent::{DecisionAgent, Difficulty};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = RuleEngine::new(BoardSize::Three);
//! let mut agent = DecisionAgent::seeded(BoardSize::Three, Difficulty::Hard, Player::O, 7);
//! let board = engine.create_empty_board();
//! let reply = agent.select_move(&board).await?;
//! assert!(engine.is_valid_move(&board, reply));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod agent;
mod difficulty;
mod error;
pub mod minimax;
mod state;
pub mod tactics;

pub use agent::DecisionAgent;
pub use difficulty::{Difficulty, ThinkingPace};
pub use error::AgentError;
pub use state::AgentState;
