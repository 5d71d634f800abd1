//! Property tests for engine invariants.

use proptest::prelude::*;
use strictly_nrow::keys::{board_from_key, board_to_key};
use strictly_nrow::rules::scan_lines;
use strictly_nrow::{Board, BoardSize, Player, Position, RuleEngine};

fn arb_size() -> impl Strategy<Value = BoardSize> {
    prop_oneof![
        Just(BoardSize::Three),
        Just(BoardSize::Four),
        Just(BoardSize::Five),
    ]
}

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn arb_board() -> impl Strategy<Value = Board> {
    arb_size().prop_flat_map(|size| {
        proptest::collection::vec(prop_oneof![Just('_'), Just('X'), Just('O')], size.cell_count())
            .prop_map(|symbols| {
                board_from_key(&symbols.into_iter().collect::<String>()).expect("Valid key")
            })
    })
}

proptest! {
    #[test]
    fn key_round_trip(board in arb_board()) {
        let key = board_to_key(&board);
        prop_assert_eq!(board_from_key(&key).unwrap(), board);
    }

    #[test]
    fn apply_move_never_mutates_input(
        board in arb_board(),
        row in 0usize..6,
        col in 0usize..6,
        player in arb_player(),
    ) {
        let engine = RuleEngine::new(board.size());
        let before = board.clone();
        let pos = Position::new(row, col);

        match engine.apply_move(&board, pos, player) {
            Ok(next) => {
                prop_assert!(engine.is_valid_move(&before, pos));
                prop_assert_ne!(&next, &board);
                prop_assert_eq!(next.count(player), board.count(player) + 1);
            }
            Err(_) => prop_assert!(!engine.is_valid_move(&before, pos)),
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn valid_moves_are_exactly_the_empty_cells(board in arb_board()) {
        let engine = RuleEngine::new(board.size());
        let side = board.side();
        for row in 0..=side {
            for col in 0..=side {
                let pos = Position::new(row, col);
                let expected = row < side && col < side && board.is_empty(pos);
                prop_assert_eq!(engine.is_valid_move(&board, pos), expected);
            }
        }
        prop_assert_eq!(
            engine.empty_positions(&board).len(),
            board.cells().iter().filter(|c| c.is_empty()).count()
        );
    }

    #[test]
    fn evaluate_is_antisymmetric(board in arb_board()) {
        let engine = RuleEngine::new(board.size());
        prop_assert_eq!(
            engine.evaluate(&board, Player::X),
            -engine.evaluate(&board, Player::O)
        );
    }

    #[test]
    fn every_run_is_detected(
        size in arb_size(),
        player in arb_player(),
        line_pick in any::<prop::sample::Index>(),
        offset_pick in any::<prop::sample::Index>(),
    ) {
        let engine = RuleEngine::new(size);
        let lines: Vec<_> = scan_lines(size).collect();
        let line = lines[line_pick.index(lines.len())];
        let cells: Vec<Position> = line.cells(size.side()).collect();
        let windows = cells.len() - size.win_length() + 1;
        let start = offset_pick.index(windows);
        let run = &cells[start..start + size.win_length()];

        let board = run.iter().fold(engine.create_empty_board(), |board, pos| {
            engine.apply_move(&board, *pos, player).expect("Empty cell")
        });

        let win = engine.check_win(&board).expect("Run must be found");
        prop_assert_eq!(win.player, player);
        prop_assert_eq!(win.line_kind, line.kind);
        prop_assert_eq!(win.positions.as_slice(), run);
    }

    #[test]
    fn ordered_moves_is_a_permutation_of_empty_cells(board in arb_board()) {
        let engine = RuleEngine::new(board.size());
        let mut ordered = engine.ordered_moves(&board);
        ordered.sort();
        let mut empty = engine.empty_positions(&board);
        empty.sort();
        prop_assert_eq!(ordered, empty);
    }
}
