//! Commonly used types and utilities for ease of import.

pub use crate::{
    find_fork_move, find_winning_move, select_move, Board, CpuPlayer, Difficulty, GameEngine,
    Mark, MoveError, Player, RoundOutcome, Scoreboard,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, print_result, print_scoreboard, CliPlayer, Session};
