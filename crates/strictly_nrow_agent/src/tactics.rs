//! One-ply tactics and the fixed strategic preference.

use strictly_nrow::{Board, Player, Position, RuleEngine};
use tracing::{instrument, trace};

/// First empty cell (row-major) where `player` would complete a run.
#[instrument(level = "trace", skip(engine, board))]
pub fn find_winning_move(engine: &RuleEngine, board: &Board, player: Player) -> Option<Position> {
    engine.empty_positions(board).into_iter().find(|pos| {
        engine
            .apply_move(board, *pos, player)
            .is_ok_and(|next| engine.check_win(&next).is_some())
    })
}

/// First empty cell (row-major) where the opponent of `player` would win.
#[instrument(level = "trace", skip(engine, board))]
pub fn find_blocking_move(engine: &RuleEngine, board: &Board, player: Player) -> Option<Position> {
    find_winning_move(engine, board, player.opponent())
}

/// Win now, otherwise block now.
pub fn find_tactical_move(engine: &RuleEngine, board: &Board, player: Player) -> Option<Position> {
    if let Some(pos) = find_winning_move(engine, board, player) {
        trace!(%pos, "Winning move available");
        return Some(pos);
    }
    let block = find_blocking_move(engine, board, player);
    if let Some(pos) = block {
        trace!(%pos, "Blocking opponent");
    }
    block
}

/// Center, then corners in fixed order, then the first empty cell.
///
/// Returns `None` only on a full board.
pub fn strategic_move(engine: &RuleEngine, board: &Board) -> Option<Position> {
    let size = engine.size();
    std::iter::once(size.center())
        .chain(size.corners())
        .find(|pos| board.is_empty(*pos))
        .or_else(|| engine.empty_positions(board).into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_nrow::keys::board_from_key;
    use strictly_nrow::BoardSize;

    fn engine() -> RuleEngine {
        RuleEngine::new(BoardSize::Three)
    }

    #[test]
    fn test_finds_win() {
        let board = board_from_key("OO_XX____").unwrap();
        assert_eq!(
            find_winning_move(&engine(), &board, Player::O),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_finds_block() {
        let board = board_from_key("OO_XX____").unwrap();
        // As X, the first cell that lets O win is (0, 2).
        assert_eq!(
            find_blocking_move(&engine(), &board, Player::X),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_win_preferred_over_block() {
        let board = board_from_key("OO_XX____").unwrap();
        assert_eq!(
            find_tactical_move(&engine(), &board, Player::X),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn test_no_tactics_on_quiet_board() {
        let board = board_from_key("X________").unwrap();
        assert_eq!(find_tactical_move(&engine(), &board, Player::O), None);
    }

    #[test]
    fn test_strategic_preferences() {
        let e = engine();
        assert_eq!(
            strategic_move(&e, &board_from_key("_________").unwrap()),
            Some(Position::new(1, 1))
        );
        assert_eq!(
            strategic_move(&e, &board_from_key("____X____").unwrap()),
            Some(Position::new(0, 0))
        );
        assert_eq!(
            strategic_move(&e, &board_from_key("X_O_X_O_X").unwrap()),
            Some(Position::new(0, 1))
        );
        assert_eq!(
            strategic_move(&e, &board_from_key("XOXOXOOXO").unwrap()),
            None
        );
    }

    #[test]
    fn test_strategic_corner_order_on_five() {
        let e = RuleEngine::new(BoardSize::Five);
        let mut key = vec!['_'; 25];
        key[12] = 'X';
        key[0] = 'O';
        let board = board_from_key(&key.into_iter().collect::<String>()).unwrap();
        assert_eq!(strategic_move(&e, &board), Some(Position::new(0, 4)));
    }
}
