//! Core game state machine: board, expected turn, terminal status and the
//! reset generation counter used to fence off stale scheduled moves.

use crate::board::{Board, Mark};
use crate::common::{MoveError, RoundOutcome};

pub struct GameEngine {
    board: Board,
    turn: Mark,
    outcome: RoundOutcome,
    generation: u64,
}

impl GameEngine {
    /// New engine: empty board, X to move, round in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: RoundOutcome::InProgress,
            generation: 0,
        }
    }

    /// Immutable view of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose move is currently expected.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Outcome as of the last applied move.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Current reset generation. Capture this when scheduling a deferred move
    /// and pass it back through [`GameEngine::apply_scheduled`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply `mark` at `index`. Rejected when the round is terminal, when it
    /// is not `mark`'s turn, or when the cell is occupied or out of range;
    /// rejections never mutate state. On success the outcome is re-evaluated
    /// (win before draw) and the turn flips if the round continues.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<RoundOutcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mark != self.turn {
            return Err(MoveError::OutOfTurn);
        }
        self.board.place(index, mark)?;
        self.outcome = self.board.outcome();
        if !self.outcome.is_terminal() {
            self.turn = self.turn.other();
        }
        Ok(self.outcome)
    }

    /// Apply a move that was scheduled earlier with a thinking delay. `token`
    /// must equal the generation observed at scheduling time; a reset in
    /// between makes the move stale and it is refused without touching the
    /// board.
    pub fn apply_scheduled(
        &mut self,
        token: u64,
        index: usize,
        mark: Mark,
    ) -> Result<RoundOutcome, MoveError> {
        if token != self.generation {
            return Err(MoveError::Stale);
        }
        self.apply_move(index, mark)
    }

    /// Clear the board for the next round. X opens regardless of the previous
    /// outcome, and the generation bump invalidates any in-flight scheduled
    /// move.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Mark::X;
        self.outcome = RoundOutcome::InProgress;
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
