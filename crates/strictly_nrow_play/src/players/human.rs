//! Human player fed by lines of text.

use super::{Player, PlayerKind};
use crate::GameSession;
use anyhow::Result;
use strictly_nrow::Position;
use strictly_nrow::keys::{self, KeyError};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Parses `row,col` or `row col`, with surrounding whitespace allowed.
///
/// Bounds are not checked here; the session rejects off-board cells.
pub fn parse_position(input: &str) -> Result<Position, KeyError> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    keys::position_from_key(&parts.join(","))
}

/// Human player reading moves from a line channel.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _session: &GameSession) -> Result<Position> {
        while let Some(line) = self.input_rx.recv().await {
            match parse_position(&line) {
                Ok(position) => {
                    debug!(player = %self.name, %position, "Human entered move");
                    return Ok(position);
                }
                Err(e) => warn!(
                    player = %self.name,
                    input = %line.trim(),
                    error = %e,
                    "Unreadable move"
                ),
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}
