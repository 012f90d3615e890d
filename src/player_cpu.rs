use crate::board::{Board, Mark};
use crate::player::Player;
use crate::strategy::{self, Difficulty};
use rand::rngs::SmallRng;

/// CPU opponent driven by the tiered strategy selector.
pub struct CpuPlayer {
    difficulty: Difficulty,
}

impl CpuPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Player for CpuPlayer {
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        own: Mark,
        foe: Mark,
    ) -> Option<usize> {
        strategy::select_move(board, own, foe, self.difficulty, rng)
    }
}
