//! The decision agent.

use crate::minimax::{Minimax, SEARCH_DEPTH};
use crate::tactics::{find_tactical_move, strategic_move};
use crate::{AgentError, AgentState, Difficulty, ThinkingPace};
use rand::distributions::Standard;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strictly_nrow::{Board, BoardSize, Player, Position, RuleEngine};
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Computer opponent for one board size and one mark.
///
/// Randomness is injected so play can be reproduced: tests pass a
/// deterministic source, the CLI a seeded or entropy-backed ChaCha stream.
#[derive(Debug)]
pub struct DecisionAgent<R: RngCore = ChaCha8Rng> {
    engine: RuleEngine,
    difficulty: Difficulty,
    player: Player,
    pace: ThinkingPace,
    rng: R,
    state: watch::Sender<AgentState>,
}

impl DecisionAgent<ChaCha8Rng> {
    /// Creates an agent seeded from system entropy.
    pub fn new(size: BoardSize, difficulty: Difficulty, player: Player) -> Self {
        Self::with_rng(size, difficulty, player, ChaCha8Rng::from_entropy())
    }

    /// Creates an agent whose choices are reproducible from `seed`.
    pub fn seeded(size: BoardSize, difficulty: Difficulty, player: Player, seed: u64) -> Self {
        Self::with_rng(size, difficulty, player, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> DecisionAgent<R> {
    /// Creates an agent drawing from the given random source.
    #[instrument(skip(rng))]
    pub fn with_rng(size: BoardSize, difficulty: Difficulty, player: Player, rng: R) -> Self {
        let (state, _) = watch::channel(AgentState::default());
        Self {
            engine: RuleEngine::new(size),
            difficulty,
            player,
            pace: ThinkingPace::default(),
            rng,
            state,
        }
    }

    /// Sets whether the agent pauses before answering.
    pub fn with_pacing(mut self, pace: ThinkingPace) -> Self {
        self.pace = pace;
        self
    }

    /// Current difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Mark the agent plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Engine the agent reasons with.
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Pacing in effect.
    pub fn pace(&self) -> ThinkingPace {
        self.pace
    }

    /// Changes the tier. Takes effect on the next decision.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(from = %self.difficulty, to = %difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Snapshot of the agent's state.
    pub fn state(&self) -> AgentState {
        self.state.borrow().clone()
    }

    /// Receiver that sees every state change, including the thinking flag
    /// while a decision is pending.
    pub fn subscribe(&self) -> watch::Receiver<AgentState> {
        self.state.subscribe()
    }

    /// Clears the state. Difficulty, mark and pacing are kept.
    pub fn reset(&mut self) {
        self.state.send_replace(AgentState::default());
    }

    /// Chooses the next move on `board`.
    ///
    /// Suspends for the thinking pause unless pacing is
    /// [`ThinkingPace::Instant`]. The hard tier's search runs on tokio's
    /// blocking pool, so a 5×5 search (seconds long) does not stall the
    /// caller's worker. Dropping the future abandons the decision and clears
    /// the thinking flag; a search already running finishes in the
    /// background and its result is discarded.
    ///
    /// # Errors
    ///
    /// - [`AgentError::SizeMismatch`] if the board is not the agent's size.
    /// - [`AgentError::TerminalBoard`] if the board is already won or full.
    /// - [`AgentError::SearchAborted`] if the search task panicked.
    #[instrument(skip(self, board), fields(player = %self.player, difficulty = %self.difficulty))]
    pub async fn select_move(&mut self, board: &Board) -> Result<Position, AgentError> {
        if board.size() != self.engine.size() {
            return Err(AgentError::SizeMismatch {
                expected: self.engine.size(),
                found: board.size(),
            });
        }
        if self.engine.check_win(board).is_some() || self.engine.is_board_full(board) {
            return Err(AgentError::TerminalBoard);
        }

        let started = Instant::now();
        let guard = Thinking::begin(&self.state);

        let delay = self.difficulty.thinking_delay(self.rng.sample(Standard));
        if self.pace == ThinkingPace::Natural {
            debug!(?delay, "Thinking");
            tokio::time::sleep(delay).await;
        }

        let immediate = decide(
            &self.engine,
            self.difficulty,
            self.player,
            &mut self.rng,
            board,
        );
        let chosen = match immediate {
            Some(pos) => pos,
            None if self.difficulty == Difficulty::Hard => {
                search(self.engine, board.clone(), self.player)
                    .await?
                    .ok_or(AgentError::TerminalBoard)?
            }
            None => return Err(AgentError::TerminalBoard),
        };

        let elapsed = started.elapsed();
        guard.finish(chosen, elapsed);
        info!(position = %chosen, ?elapsed, "Move selected");
        Ok(chosen)
    }
}

/// Moves that need no search. For the hard tier this is tactics only;
/// `None` there means the caller must run [`search`].
fn decide<R: RngCore>(
    engine: &RuleEngine,
    difficulty: Difficulty,
    player: Player,
    rng: &mut R,
    board: &Board,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => {
            let roll: f64 = rng.sample(Standard);
            let tactical = if roll > 0.5 {
                find_tactical_move(engine, board, player)
            } else {
                None
            };
            tactical.or_else(|| random_cell(engine, board, rng))
        }
        Difficulty::Medium => {
            find_tactical_move(engine, board, player).or_else(|| strategic_move(engine, board))
        }
        Difficulty::Hard => find_tactical_move(engine, board, player),
    }
}

async fn search(
    engine: RuleEngine,
    board: Board,
    player: Player,
) -> Result<Option<Position>, AgentError> {
    tokio::task::spawn_blocking(move || {
        Minimax::new(&engine, player).best_move(&board, SEARCH_DEPTH)
    })
    .await
    .map_err(|e| {
        warn!(error = %e, "Search task failed");
        AgentError::SearchAborted
    })
}

fn random_cell<R: RngCore>(engine: &RuleEngine, board: &Board, rng: &mut R) -> Option<Position> {
    let empty = engine.empty_positions(board);
    let last = empty.len().checked_sub(1)?;
    let u: f64 = rng.sample(Standard);
    let index = ((u * empty.len() as f64) as usize).min(last);
    empty.get(index).copied()
}

/// Pending-decision marker. Clears the thinking flag if dropped unfinished.
struct Thinking<'a> {
    state: &'a watch::Sender<AgentState>,
    done: bool,
}

impl<'a> Thinking<'a> {
    fn begin(state: &'a watch::Sender<AgentState>) -> Self {
        state.send_modify(AgentState::begin);
        Self { state, done: false }
    }

    fn finish(mut self, chosen: Position, elapsed: std::time::Duration) {
        self.state.send_modify(|s| s.finish(chosen, elapsed));
        self.done = true;
    }
}

impl Drop for Thinking<'_> {
    fn drop(&mut self) {
        if !self.done {
            self.state.send_modify(AgentState::abandon);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use strictly_nrow::keys::board_from_key;

    #[test]
    fn test_easy_random_index_is_clamped() {
        let engine = RuleEngine::new(BoardSize::Three);
        let board = engine.create_empty_board();
        let mut high = StepRng::new(u64::MAX, 0);
        assert_eq!(
            random_cell(&engine, &board, &mut high),
            Some(Position::new(2, 2))
        );
        let mut low = StepRng::new(0, 0);
        assert_eq!(
            random_cell(&engine, &board, &mut low),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_hard_prefers_tactics_over_search() {
        let engine = RuleEngine::new(BoardSize::Three);
        let board = board_from_key("OO_XX____").unwrap();
        let mut rng = StepRng::new(0, 0);
        assert_eq!(
            decide(&engine, Difficulty::Hard, Player::X, &mut rng, &board),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn test_guard_clears_flag_when_dropped() {
        let (tx, rx) = watch::channel(AgentState::default());
        let guard = Thinking::begin(&tx);
        assert!(*rx.borrow().thinking());
        drop(guard);
        assert!(!*rx.borrow().thinking());
        assert_eq!(*rx.borrow().move_count(), 0);
    }
}
