use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{CpuPlayer, Difficulty, Mark, RoundOutcome, Session};

#[tokio::test]
async fn test_session_scoreboard_persists_across_rounds() {
    let mut rng = SmallRng::seed_from_u64(11);
    // the human slot holds an easy CPU so rounds run unattended
    let mut session = Session::new(Difficulty::Medium, Mark::X).without_thinking_delay();
    let mut stand_in = CpuPlayer::new(Difficulty::Easy);

    for round in 1..=5 {
        session.reset_round();
        let outcome = session.play_round(&mut stand_in, &mut rng).await.unwrap();
        assert!(outcome.is_terminal());
        assert_eq!(session.scoreboard().total_rounds(), round);
    }
}

#[tokio::test]
async fn test_round_reset_keeps_scores_and_clears_board() {
    let mut rng = SmallRng::seed_from_u64(29);
    let mut session = Session::new(Difficulty::Hard, Mark::X).without_thinking_delay();
    let mut stand_in = CpuPlayer::new(Difficulty::Hard);

    session.play_round(&mut stand_in, &mut rng).await.unwrap();
    let scores = *session.scoreboard();
    assert_eq!(scores.total_rounds(), 1);

    session.reset_round();
    assert_eq!(session.engine().board().empty_count(), 9);
    assert_eq!(session.engine().turn(), Mark::X);
    assert_eq!(*session.scoreboard(), scores);
}

#[tokio::test]
async fn test_quit_resets_scores() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut session = Session::new(Difficulty::Easy, Mark::O).without_thinking_delay();
    let mut stand_in = CpuPlayer::new(Difficulty::Easy);

    session.play_round(&mut stand_in, &mut rng).await.unwrap();
    assert_eq!(session.scoreboard().total_rounds(), 1);

    session.reset_scores();
    assert_eq!(session.scoreboard().total_rounds(), 0);
    assert_eq!(session.engine().board().empty_count(), 9);
}

#[tokio::test]
async fn test_cpu_opens_when_human_holds_o() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut session = Session::new(Difficulty::Medium, Mark::O).without_thinking_delay();
    let mut stand_in = CpuPlayer::new(Difficulty::Medium);

    // X opens and the CPU holds X, so the first step is not the human's
    assert!(!session.turn_is_human());
    let outcome = session.step(&mut stand_in, &mut rng).await.unwrap();
    assert_eq!(outcome, RoundOutcome::InProgress);
    assert_eq!(session.engine().board().empty_count(), 8);
    assert!(session.turn_is_human());
}

#[tokio::test]
async fn test_hard_session_against_hard_stand_in_draws() {
    // the hard fallback chain is deterministic from the empty board, both
    // sides defend every threat and the round ties
    let mut rng = SmallRng::seed_from_u64(42);
    let mut session = Session::new(Difficulty::Hard, Mark::X).without_thinking_delay();
    let mut stand_in = CpuPlayer::new(Difficulty::Hard);

    let outcome = session.play_round(&mut stand_in, &mut rng).await.unwrap();
    assert_eq!(outcome, RoundOutcome::Draw);
    assert_eq!(session.scoreboard().ties, 1);
}
