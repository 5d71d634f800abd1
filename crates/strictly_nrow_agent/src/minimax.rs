//! Depth-bounded minimax without pruning.
//!
//! Scores are from the searching player's point of view. A win found with
//! `depth` plies of budget left scores `10 - depth`, a loss `depth - 10`,
//! and anything else at the horizon scores zero. On boards larger than 3×3
//! the fixed depth cannot see the end of the game, so the result is a
//! heuristic choice rather than a proven one.

use std::collections::HashMap;
use strictly_nrow::{Board, Player, Position, RuleEngine};
use tracing::{debug, instrument};

/// Search depth used by the hard tier, regardless of board size.
pub const SEARCH_DEPTH: u32 = 5;

const WIN: i32 = 10;

/// Minimax search for one player.
///
/// Each search memoizes subtree scores by board key, depth and side to move.
/// The table only saves work; it never changes a score.
#[derive(Debug)]
pub struct Minimax<'a> {
    engine: &'a RuleEngine,
    me: Player,
    memo: HashMap<(String, u32, bool), i32>,
}

impl<'a> Minimax<'a> {
    /// Creates a search for `me` on the engine's board size.
    pub fn new(engine: &'a RuleEngine, me: Player) -> Self {
        Self {
            engine,
            me,
            memo: HashMap::new(),
        }
    }

    /// Scores every empty cell for `me` and keeps the first maximum.
    ///
    /// Cells are tried in row-major order. Returns `None` on a full board.
    #[instrument(level = "debug", skip(self, board), fields(me = %self.me))]
    pub fn best_move(&mut self, board: &Board, depth: u32) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;

        for pos in self.engine.empty_positions(board) {
            let Ok(next) = self.engine.apply_move(board, pos, self.me) else {
                continue;
            };
            let score = self.score(&next, depth, false);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
            }
        }

        debug!(
            best = ?best,
            nodes = self.memo.len(),
            "Minimax search complete"
        );
        best.map(|(pos, _)| pos)
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// `maximizing` means `me` is to move.
    pub fn score(&mut self, board: &Board, depth: u32, maximizing: bool) -> i32 {
        if let Some(win) = self.engine.check_win(board) {
            let depth = depth as i32;
            return if win.player == self.me {
                WIN - depth
            } else {
                depth - WIN
            };
        }

        if depth == 0 || self.engine.is_board_full(board) {
            return 0;
        }

        let key = (self.engine.board_to_key(board), depth, maximizing);
        if let Some(score) = self.memo.get(&key) {
            return *score;
        }

        let mover = if maximizing { self.me } else { self.me.opponent() };
        let children = self
            .engine
            .empty_positions(board)
            .into_iter()
            .filter_map(|pos| self.engine.apply_move(board, pos, mover).ok())
            .collect::<Vec<_>>();

        let scores = children
            .iter()
            .map(|child| self.score(child, depth - 1, !maximizing))
            .collect::<Vec<_>>();

        let value = if maximizing {
            scores.into_iter().max()
        } else {
            scores.into_iter().min()
        }
        .unwrap_or(0);

        self.memo.insert(key, value);
        value
    }
}
