//! Static position evaluation.
//!
//! Scores are from one player's perspective: positive favours that player.
//! Terminal positions score exactly `±WIN_SCORE` or zero; everything else is
//! a sum of line potentials plus a small center bonus.

use super::draw::is_full;
use super::lines::scan_lines;
use super::win::check_win;
use crate::{Board, Cell, Player, Position};
use tracing::instrument;

/// Score of a won position.
pub const WIN_SCORE: f64 = 10.0;

/// Bonus for holding the center cell.
pub const CENTER_BONUS: f64 = 0.3;

const ONE_AWAY: i32 = 5;
const TWO_AWAY: i32 = 2;
const FOOTHOLD: i32 = 1;

/// Evaluates the board for `perspective`.
///
/// Antisymmetric: `evaluate(b, X) == -evaluate(b, O)` for every board.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board, perspective: Player) -> f64 {
    if let Some(win) = check_win(board) {
        return if win.player == perspective {
            WIN_SCORE
        } else {
            -WIN_SCORE
        };
    }

    if is_full(board) {
        return 0.0;
    }

    let opponent = perspective.opponent();
    let potential = line_potential(board, perspective) - line_potential(board, opponent);

    let center = match board.get(board.size().center()) {
        Some(Cell::Mark(p)) if p == perspective => CENTER_BONUS,
        Some(Cell::Mark(_)) => -CENTER_BONUS,
        _ => 0.0,
    };

    f64::from(potential) + center
}

/// Sums window scores for one player over every scanned line.
///
/// Every window along a line is scored, not only the leading one, so on
/// 5×5 a line contributes its two overlapping windows.
fn line_potential(board: &Board, player: Player) -> i32 {
    let side = board.side();
    let win_length = board.size().win_length();

    scan_lines(board.size())
        .map(|line| {
            let cells: Vec<Position> = line.cells(side).collect();
            cells
                .windows(win_length)
                .map(|window| window_score(board, window, player))
                .sum::<i32>()
        })
        .sum()
}

/// Scores one run of exactly `win_length` cells.
///
/// A window holding any opponent mark is blocked and scores nothing.
fn window_score(board: &Board, window: &[Position], player: Player) -> i32 {
    let win_length = window.len();
    let mut own = 0;
    let mut empty = 0;

    for pos in window {
        match board.get(*pos) {
            Some(Cell::Mark(p)) if p == player => own += 1,
            Some(Cell::Mark(_)) => return 0,
            _ => empty += 1,
        }
    }

    if own + 1 == win_length && empty == 1 {
        ONE_AWAY
    } else if own + 2 == win_length && empty == 2 {
        TWO_AWAY
    } else if own > 0 {
        FOOTHOLD
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::board_from_key;

    #[test]
    fn test_terminal_scores() {
        let board = board_from_key("XXXOO____").unwrap();
        assert_eq!(evaluate(&board, Player::X), WIN_SCORE);
        assert_eq!(evaluate(&board, Player::O), -WIN_SCORE);

        let draw = board_from_key("XOXOXXOXO").unwrap();
        assert_eq!(evaluate(&draw, Player::X), 0.0);
    }

    #[test]
    fn test_empty_board_is_neutral() {
        let board = board_from_key("_________").unwrap();
        assert_eq!(evaluate(&board, Player::X), 0.0);
    }

    #[test]
    fn test_center_mark() {
        // X alone in the center touches row 1, column 1 and both diagonals,
        // each two-away (score 2), plus the center bonus.
        let board = board_from_key("____X____").unwrap();
        assert!((evaluate(&board, Player::X) - (8.0 + CENTER_BONUS)).abs() < 1e-9);
    }

    #[test]
    fn test_one_away_line() {
        let board = board_from_key("XX______O").unwrap();
        // X: row 0 = 5, columns 0 and 1 = 2 each, main diagonal blocked.
        // O: row 2 = 2, column 2 = 2, main diagonal blocked.
        assert_eq!(evaluate(&board, Player::X), 9.0 - 4.0);
    }

    #[test]
    fn test_blocked_window_scores_zero() {
        let board = board_from_key("XO_______").unwrap();
        let window = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        assert_eq!(window_score(&board, &window, Player::X), 0);
        assert_eq!(window_score(&board, &window, Player::O), 0);
    }

    #[test]
    fn test_five_board_counts_every_window() {
        // A single X at (0,2) sits in both windows of row 0 and in the
        // first window of column 2; no scanned diagonal passes through it.
        let mut key = vec!['_'; 25];
        key[2] = 'X';
        let board = board_from_key(&key.into_iter().collect::<String>()).unwrap();
        assert_eq!(evaluate(&board, Player::X), 3.0);
    }
}
