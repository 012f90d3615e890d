use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tictactoe::{GameEngine, Mark, RoundOutcome};

/// Play random legal moves until the round ends, checking invariants after
/// every applied move.
fn play_random_round(seed: u64) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    let mut plies = 0;
    while !engine.is_over() {
        let n = engine.board().empty_count();
        assert!(n > 0, "in-progress round must have an empty cell");
        let pick = rng.random_range(0..n);
        let index = engine.board().empty_cells().nth(pick).unwrap();
        engine.apply_move(index, engine.turn()).unwrap();
        plies += 1;
        assert!(plies <= 9, "round exceeded 9 plies");
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn random_round_reaches_exactly_one_terminal_state(seed in any::<u64>()) {
        let engine = play_random_round(seed);
        let board = engine.board();
        match engine.outcome() {
            RoundOutcome::Win(mark) => {
                prop_assert!(board.check_win(mark));
                prop_assert!(!board.check_win(mark.other()));
                prop_assert!(board.winning_pattern(mark).is_some());
            }
            RoundOutcome::Draw => {
                prop_assert!(board.is_full());
                prop_assert!(!board.check_win(Mark::X));
                prop_assert!(!board.check_win(Mark::O));
            }
            RoundOutcome::InProgress => prop_assert!(false, "round did not terminate"),
        }
    }

    #[test]
    fn no_double_win_through_legal_play(seed in any::<u64>()) {
        let engine = play_random_round(seed);
        let board = engine.board();
        prop_assert!(!(board.check_win(Mark::X) && board.check_win(Mark::O)));
    }

    #[test]
    fn rejected_moves_never_mutate(seed in any::<u64>(), index in 0usize..9, wild in any::<usize>()) {
        let mut engine = play_random_round(seed);
        let before = *engine.board();
        let turn = engine.turn();

        // round is terminal here, every move must be refused unchanged
        prop_assert!(engine.apply_move(index, turn).is_err());
        prop_assert_eq!(*engine.board(), before);
        prop_assert!(engine.apply_move(wild, turn).is_err());
        prop_assert_eq!(*engine.board(), before);
    }

    #[test]
    fn occupied_cell_rejection_preserves_state(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();
        // play a couple of opening moves
        for _ in 0..2 {
            let n = engine.board().empty_count();
            let pick = rng.random_range(0..n);
            let index = engine.board().empty_cells().nth(pick).unwrap();
            engine.apply_move(index, engine.turn()).unwrap();
        }
        let occupied = (0..9).find(|&i| engine.board().get(i).is_some()).unwrap();
        let before = *engine.board();
        let turn_before = engine.turn();
        prop_assert!(engine.apply_move(occupied, engine.turn()).is_err());
        prop_assert_eq!(*engine.board(), before);
        prop_assert_eq!(engine.turn(), turn_before);
    }
}
