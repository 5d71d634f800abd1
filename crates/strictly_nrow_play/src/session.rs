//! Authoritative state of a series of rounds.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strictly_nrow::{
    Board, BoardSize, IllegalReason, MoveError, Player, Position, RuleEngine, WinCondition,
};
use tracing::{debug, info, instrument};

/// Outcome of the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundStatus {
    /// Moves are still being made.
    InProgress,
    /// A run was completed.
    Won(WinCondition),
    /// The board filled without a run.
    Draw,
}

/// One applied move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct MoveRecord {
    /// Cell that was marked.
    position: Position,
    /// Mark that was placed.
    player: Player,
    /// 1-based ordinal within the round.
    move_number: u32,
    /// When the move was applied.
    #[new(value = "Utc::now()")]
    timestamp: DateTime<Utc>,
}

/// Rounds won per mark, plus draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
    draws: u32,
}

impl Scores {
    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn record(&mut self, status: &RoundStatus) {
        match status {
            RoundStatus::Won(win) => match win.player {
                Player::X => self.x += 1,
                Player::O => self.o += 1,
            },
            RoundStatus::Draw => self.draws += 1,
            RoundStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - O {} ({} drawn)", self.x, self.o, self.draws)
    }
}

/// Board, turn, history and score of a series of rounds.
///
/// X always moves first. Moves go through the [`RuleEngine`]; on top of the
/// engine the session refuses moves once a round is decided.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    engine: RuleEngine,
    board: Board,
    to_move: Player,
    status: RoundStatus,
    history: Vec<MoveRecord>,
    scores: Scores,
    round: u32,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Starts round 1 on an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let engine = RuleEngine::new(size);
        info!(%size, "Starting session");
        Self {
            board: engine.create_empty_board(),
            engine,
            to_move: Player::X,
            status: RoundStatus::InProgress,
            history: Vec::new(),
            scores: Scores::default(),
            round: 1,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    /// Places the mark of the player to move.
    ///
    /// On success the turn passes to the opponent, or the round ends and the
    /// score is updated.
    ///
    /// # Errors
    ///
    /// - [`MoveError::IllegalMove`] with [`IllegalReason::GameOver`] once the
    ///   round is decided.
    /// - Any [`MoveError`] from [`RuleEngine::apply_move`].
    #[instrument(skip(self), fields(round = self.round, player = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<&RoundStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::IllegalMove {
                position,
                reason: IllegalReason::GameOver,
            });
        }

        let board = self.engine.apply_move(&self.board, position, self.to_move)?;
        let move_number = self.history.len() as u32 + 1;
        self.history
            .push(MoveRecord::new(position, self.to_move, move_number));
        self.board = board;
        debug!(%position, move_number, "Move applied");

        if let Some(win) = self.engine.check_win(&self.board) {
            self.finish(RoundStatus::Won(win));
        } else if self.engine.is_board_full(&self.board) {
            self.finish(RoundStatus::Draw);
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(&self.status)
    }

    fn finish(&mut self, status: RoundStatus) {
        self.scores.record(&status);
        self.status = status;
        self.ended_at = Some(Utc::now());
        info!(round = self.round, status = ?self.status, scores = %self.scores, "Round over");
    }

    /// Starts the next round. Scores carry over.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn reset(&mut self) {
        self.board = self.engine.create_empty_board();
        self.to_move = Player::X;
        self.status = RoundStatus::InProgress;
        self.history.clear();
        self.round += 1;
        self.started_at = Utc::now();
        self.ended_at = None;
        debug!(next = self.round, "Round reset");
    }

    /// The round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    /// Winner of the current round, if decided by a run.
    pub fn winner(&self) -> Option<Player> {
        match &self.status {
            RoundStatus::Won(win) => Some(win.player),
            _ => None,
        }
    }

    /// Time spent on the current round, up to its end if it has ended.
    pub fn duration(&self) -> chrono::Duration {
        self.ended_at.unwrap_or_else(Utc::now) - self.started_at
    }

    /// Board size of the session.
    pub fn size(&self) -> BoardSize {
        self.engine.size()
    }
}
