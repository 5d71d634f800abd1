//! Player backed by the decision agent.

use super::{Player, PlayerKind};
use crate::GameSession;
use anyhow::{Context, Result};
use strictly_nrow::Position;
use strictly_nrow_agent::{AgentState, DecisionAgent};
use tokio::sync::watch;
use tracing::{debug, info};

/// Computer player.
pub struct AgentPlayer {
    name: String,
    agent: DecisionAgent,
}

impl AgentPlayer {
    /// Wraps an agent under a display name.
    pub fn new(name: impl Into<String>, agent: DecisionAgent) -> Self {
        let name = name.into();
        info!(
            agent = %name,
            mark = %agent.player(),
            difficulty = %agent.difficulty(),
            "Creating agent player"
        );
        Self { name, agent }
    }

    /// The wrapped agent.
    pub fn agent(&self) -> &DecisionAgent {
        &self.agent
    }

    /// Observes the agent's thinking flag and counters.
    pub fn subscribe(&self) -> watch::Receiver<AgentState> {
        self.agent.subscribe()
    }
}

#[async_trait::async_trait]
impl Player for AgentPlayer {
    async fn get_move(&mut self, session: &GameSession) -> Result<Position> {
        debug!(agent = %self.name, "Agent's turn");
        let position = self
            .agent
            .select_move(session.board())
            .await
            .with_context(|| format!("{} could not choose a move", self.name))?;
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Agent
    }
}
