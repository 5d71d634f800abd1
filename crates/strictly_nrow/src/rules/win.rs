//! Win detection for N-in-a-row.

use super::lines::{scan_lines, Line};
use crate::{Board, Cell, Player, Position, WinCondition};
use tracing::instrument;

/// Checks if there is a winning run on the board.
///
/// Lines are scanned in [`scan_lines`] order and the first line holding a
/// run of `win_length` identical marks decides the result, even when other
/// lines also hold runs.
#[instrument(level = "trace", skip(board))]
pub fn check_win(board: &Board) -> Option<WinCondition> {
    let win_length = board.size().win_length();
    scan_lines(board.size()).find_map(|line| check_line(board, line, win_length))
}

/// Walks one line keeping the current streak.
///
/// An empty cell clears the streak; a mark of the other player restarts it
/// at that cell.
fn check_line(board: &Board, line: Line, win_length: usize) -> Option<WinCondition> {
    let side = board.side();
    let mut owner: Option<Player> = None;
    let mut streak = 0;

    for (i, pos) in line.cells(side).enumerate() {
        match board.get(pos)? {
            Cell::Empty => {
                owner = None;
                streak = 0;
            }
            Cell::Mark(player) if owner == Some(player) => streak += 1,
            Cell::Mark(player) => {
                owner = Some(player);
                streak = 1;
            }
        }

        if streak >= win_length
            && let Some(player) = owner
        {
            let positions: Vec<Position> = line
                .cells(side)
                .skip(i + 1 - win_length)
                .take(win_length)
                .collect();
            return Some(WinCondition {
                player,
                positions,
                line_kind: line.kind,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::board_from_key;
    use crate::LineKind;

    #[test]
    fn test_no_winner_empty_board() {
        let board = board_from_key("_________").unwrap();
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from_key("XXXOO____").unwrap();
        let win = check_win(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line_kind, LineKind::Row);
        assert_eq!(
            win.positions,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from_key("XXO_O_OX_").unwrap();
        let win = check_win(&board).unwrap();
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line_kind, LineKind::Diagonal);
        assert_eq!(
            win.positions,
            vec![Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_streak_restarts_on_owner_change() {
        // Row 0 of a 5x5 board: O X X X X
        let board = board_from_key("OXXXX____________________").unwrap();
        let win = check_win(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.positions.first(), Some(&Position::new(0, 1)));
        assert_eq!(win.positions.len(), 4);
    }

    #[test]
    fn test_gap_breaks_run() {
        let board = board_from_key("XX_XX____________________").unwrap();
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // X holds row 1 and column 0 simultaneously.
        let board = board_from_key("XOOXXXXO_").unwrap();
        let win = check_win(&board).unwrap();
        assert_eq!(win.line_kind, LineKind::Row);
        assert_eq!(win.positions[0], Position::new(1, 0));
    }

    #[test]
    fn test_offset_diagonal_on_five() {
        // O on (1,0) (2,1) (3,2) (4,3)
        let mut key = vec!['_'; 25];
        for (r, c) in [(1, 0), (2, 1), (3, 2), (4, 3)] {
            key[r * 5 + c] = 'O';
        }
        let board = board_from_key(&key.into_iter().collect::<String>()).unwrap();
        let win = check_win(&board).unwrap();
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line_kind, LineKind::Diagonal);
        assert_eq!(win.positions[0], Position::new(1, 0));
    }
}
