// Tiered move selection for the CPU opponent.
// Lookahead runs on scratch copies of the board, never in-place undo.

use crate::board::{Board, Mark};
use crate::config::{
    CENTER, CORNERS, EASY_DELAY_MS, EDGES, FORK_MIN_EMPTY, HARD_DELAY_MS, MEDIUM_DELAY_MS,
};
use core::time::Duration;
use rand::Rng;

/// Difficulty tier governing which primitives the opponent composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl core::str::FromStr for Difficulty {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err("expected one of: easy, medium, hard"),
        }
    }
}

/// Pick the CPU's next cell. Returns `None` only when the board is full,
/// which a correctly sequenced driver never asks about.
///
/// Each tier is an explicit ordered fallback chain:
/// - Easy: block the human's win, else a 20% chance to take our own win,
///   else random.
/// - Medium: own win, else block, else random.
/// - Hard: own win, else block, else own fork, else block the human's fork,
///   else positional preference, else random.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    cpu: Mark,
    human: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => {
            if let Some(block) = find_winning_move(board, human) {
                return Some(block);
            }
            if rng.random_bool(0.20) {
                if let Some(win) = find_winning_move(board, cpu) {
                    return Some(win);
                }
            }
            random_move(board, rng)
        }
        Difficulty::Medium => find_winning_move(board, cpu)
            .or_else(|| find_winning_move(board, human))
            .or_else(|| random_move(board, rng)),
        Difficulty::Hard => find_winning_move(board, cpu)
            .or_else(|| find_winning_move(board, human))
            .or_else(|| find_fork_move(board, cpu))
            .or_else(|| find_fork_move(board, human))
            .or_else(|| positional_move(board))
            .or_else(|| random_move(board, rng)),
    }
}

/// Uniform pick over the currently empty cells.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let n = board.empty_count();
    if n == 0 {
        return None;
    }
    board.empty_cells().nth(rng.random_range(0..n))
}

/// Lowest-index empty cell where placing `mark` wins immediately. Exhaustive
/// scan in ascending order, so ties break toward the lowest index.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board.empty_cells().find(|&index| {
        let mut scratch = *board;
        scratch.place(index, mark).is_ok() && scratch.check_win(mark)
    })
}

/// Lowest-index empty cell from which `mark` would hold two or more
/// immediate winning replies (a double threat one ply ahead). Skipped
/// entirely below [`FORK_MIN_EMPTY`] empty cells; the tier falls through to
/// its next primitive.
pub fn find_fork_move(board: &Board, mark: Mark) -> Option<usize> {
    if board.empty_count() < FORK_MIN_EMPTY {
        return None;
    }
    for index in board.empty_cells() {
        let mut scratch = *board;
        if scratch.place(index, mark).is_err() {
            continue;
        }
        let threats = scratch
            .empty_cells()
            .filter(|&next| {
                let mut reply = scratch;
                reply.place(next, mark).is_ok() && reply.check_win(mark)
            })
            .count();
        if threats >= 2 {
            return Some(index);
        }
    }
    None
}

/// Center, then corners, then edges, each in ascending index order.
pub fn positional_move(board: &Board) -> Option<usize> {
    if board.get(CENTER).is_none() {
        return Some(CENTER);
    }
    CORNERS
        .iter()
        .chain(EDGES.iter())
        .copied()
        .find(|&index| board.get(index).is_none())
}

/// Randomized thinking pause per tier, for perceived realism only. The
/// selected move never depends on this.
pub fn think_delay<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Duration {
    let (lo, hi) = match difficulty {
        Difficulty::Easy => EASY_DELAY_MS,
        Difficulty::Medium => MEDIUM_DELAY_MS,
        Difficulty::Hard => HARD_DELAY_MS,
    };
    Duration::from_millis(rng.random_range(lo..hi))
}
