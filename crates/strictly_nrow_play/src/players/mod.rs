//! Player trait and implementations.

mod agent;
mod human;

pub use agent::AgentPlayer;
pub use human::{HumanPlayer, parse_position};

use crate::GameSession;
use anyhow::Result;
use strictly_nrow::Position;

/// Who is behind a [`Player`].
///
/// The orchestrator re-asks a human after an invalid move but treats an
/// invalid move from an agent as a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Moves typed by a person.
    Human,
    /// Moves chosen by a [`strictly_nrow_agent::DecisionAgent`].
    Agent,
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next move for the player to move in `session`.
    async fn get_move(&mut self, session: &GameSession) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether a person or an agent is playing.
    fn kind(&self) -> PlayerKind;
}
