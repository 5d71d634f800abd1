//! Read-only snapshot of what the agent is doing.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strictly_nrow::Position;

/// Introspection state of a [`DecisionAgent`](crate::DecisionAgent).
///
/// Purely informational; nothing in the rules depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AgentState {
    /// A decision is pending.
    thinking: bool,
    /// Move returned by the last completed decision.
    last_move: Option<Position>,
    /// Decisions completed since creation or the last reset.
    move_count: u32,
    /// Wall time of the last completed decision, pause included.
    thinking_time: Duration,
}

impl AgentState {
    pub(crate) fn begin(&mut self) {
        self.thinking = true;
    }

    pub(crate) fn finish(&mut self, chosen: Position, elapsed: Duration) {
        self.thinking = false;
        self.last_move = Some(chosen);
        self.move_count += 1;
        self.thinking_time = elapsed;
    }

    pub(crate) fn abandon(&mut self) {
        self.thinking = false;
    }
}
