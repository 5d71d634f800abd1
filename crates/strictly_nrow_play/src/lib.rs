//! Strictly N-in-a-row - terminal play.
//!
//! Wires the rule engine and the decision agent into playable rounds:
//!
//! - [`GameSession`] owns the board, the turn, the history and the score.
//! - [`players`] adapts humans and agents to one async [`Player`] trait.
//! - [`Orchestrator`] runs a round and reports [`GameEvent`]s to the UI.
//! - [`Preferences`] holds the defaults a run starts from.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
pub mod players;
mod session;

pub use config::{ConfigError, Preferences};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{AgentPlayer, HumanPlayer, Player, PlayerKind};
pub use session::{GameSession, MoveRecord, RoundStatus, Scores};
