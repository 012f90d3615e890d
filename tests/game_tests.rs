use tictactoe::{GameEngine, Mark, MoveError, RoundOutcome, Scoreboard};

#[test]
fn test_turns_alternate_strictly() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.turn(), Mark::X);
    engine.apply_move(0, Mark::X).unwrap();
    assert_eq!(engine.turn(), Mark::O);
    engine.apply_move(4, Mark::O).unwrap();
    assert_eq!(engine.turn(), Mark::X);
}

#[test]
fn test_scheduled_move_with_current_token_applies() {
    let mut engine = GameEngine::new();
    let token = engine.generation();
    assert_eq!(
        engine.apply_scheduled(token, 4, Mark::X).unwrap(),
        RoundOutcome::InProgress
    );
    assert_eq!(engine.board().get(4), Some(Mark::X));
}

#[test]
fn test_reset_invalidates_pending_scheduled_move() {
    let mut engine = GameEngine::new();
    engine.apply_move(0, Mark::X).unwrap();

    // a CPU move scheduled now...
    let token = engine.generation();
    // ...is overtaken by a round reset before it fires
    engine.reset();

    let before = *engine.board();
    assert_eq!(
        engine.apply_scheduled(token, 4, Mark::X).unwrap_err(),
        MoveError::Stale
    );
    assert_eq!(*engine.board(), before, "stale move must not touch the board");

    // the rescheduled move with the fresh token goes through
    let token = engine.generation();
    engine.apply_scheduled(token, 4, Mark::X).unwrap();
    assert_eq!(engine.board().get(4), Some(Mark::X));
}

#[test]
fn test_scoreboard_counts_each_outcome_once() {
    let mut scores = Scoreboard::new();
    scores.record(RoundOutcome::Win(Mark::X), Mark::X);
    scores.record(RoundOutcome::Win(Mark::O), Mark::X);
    scores.record(RoundOutcome::Draw, Mark::X);
    scores.record(RoundOutcome::InProgress, Mark::X);

    assert_eq!(scores.player, 1);
    assert_eq!(scores.cpu, 1);
    assert_eq!(scores.ties, 1);
    assert_eq!(scores.total_rounds(), 3);
}

#[test]
fn test_scoreboard_follows_the_player_mark() {
    let mut scores = Scoreboard::new();
    scores.record(RoundOutcome::Win(Mark::X), Mark::O);
    assert_eq!(scores.cpu, 1);
    assert_eq!(scores.player, 0);

    scores.record(RoundOutcome::Win(Mark::O), Mark::O);
    assert_eq!(scores.player, 1);
}

#[test]
fn test_scoreboard_reset() {
    let mut scores = Scoreboard::new();
    scores.record(RoundOutcome::Draw, Mark::X);
    scores.record(RoundOutcome::Win(Mark::X), Mark::X);
    scores.reset();
    assert_eq!(scores, Scoreboard::new());
}

#[test]
fn test_generation_survives_many_resets() {
    let mut engine = GameEngine::new();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        assert!(seen.insert(engine.generation()), "generation reused");
        engine.reset();
    }
}
