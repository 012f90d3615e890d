use crate::board::{Board, Mark};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next cell index for `own` given the current board, or
    /// `None` when no legal move exists.
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        own: Mark,
        foe: Mark,
    ) -> Option<usize>;
}
