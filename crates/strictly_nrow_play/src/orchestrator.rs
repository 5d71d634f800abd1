//! Game orchestration between players.

use crate::players::{Player, PlayerKind};
use crate::session::{GameSession, RoundStatus, Scores};
use anyhow::{Context, Result};
use strictly_nrow::{Player as Mark, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Board redrawn.
    StateChanged(String),
    /// An agent started deciding.
    AgentThinking {
        /// Agent's display name.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Mover's display name.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Cell marked.
        position: Position,
    },
    /// A human move was refused; the same player is asked again.
    InvalidMove {
        /// Mover's display name.
        player: String,
        /// Why the move was refused.
        reason: String,
    },
    /// Round ended.
    GameOver {
        /// Winner's display name, `None` for a draw.
        winner: Option<String>,
        /// Running score after this round.
        scores: Scores,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    session: GameSession,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays the current round to its end.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move, if an agent produces an
    /// illegal one, or if the event receiver is gone.
    #[instrument(skip(self), fields(round = self.session.round()))]
    pub async fn run(&mut self) -> Result<RoundStatus> {
        info!(
            x = %self.player_x.name(),
            o = %self.player_o.name(),
            "Starting round"
        );
        self.emit(GameEvent::StateChanged(self.session.board().to_string()))?;

        while !self.session.is_over() {
            let mark = *self.session.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = player.name().to_string();
            let kind = player.kind();

            if kind == PlayerKind::Agent {
                self.event_tx
                    .send(GameEvent::AgentThinking {
                        player: name.clone(),
                    })
                    .context("Event receiver dropped")?;
            }

            debug!(player = %name, %mark, "Waiting for move");
            let position = player.get_move(&self.session).await?;

            match self.session.play(position) {
                Ok(_) => {
                    self.emit(GameEvent::MoveMade {
                        player: name,
                        mark,
                        position,
                    })?;
                    self.emit(GameEvent::StateChanged(self.session.board().to_string()))?;
                }
                Err(e) if kind == PlayerKind::Human => {
                    warn!(player = %name, error = %e, "Invalid move, asking again");
                    self.emit(GameEvent::InvalidMove {
                        player: name,
                        reason: e.to_string(),
                    })?;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("{name} played an illegal move"));
                }
            }
        }

        let winner = self.session.winner().map(|mark| match mark {
            Mark::X => self.player_x.name().to_string(),
            Mark::O => self.player_o.name().to_string(),
        });
        info!(winner = ?winner, scores = %self.session.scores(), "Round finished");
        self.emit(GameEvent::GameOver {
            winner,
            scores: *self.session.scores(),
        })?;

        Ok(self.session.status().clone())
    }

    /// Starts the next round; scores carry over.
    pub fn restart(&mut self) {
        self.session.reset();
    }

    fn emit(&self, event: GameEvent) -> Result<()> {
        self.event_tx.send(event).context("Event receiver dropped")
    }
}
