//! Common types for Tic-Tac-Toe: move errors and round outcomes.

use crate::board::Mark;

/// Result of a round, derived from the board after every move. Win is always
/// evaluated before draw, so a line completed on the last empty cell scores
/// as a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// Moves are still being accepted.
    InProgress,
    /// The given mark completed a win pattern.
    Win(Mark),
    /// Board full with no winner.
    Draw,
}

impl RoundOutcome {
    /// Returns `true` when no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

/// Errors returned by board and engine operations. Expected rejections: the
/// caller refuses the move and carries on, nothing escalates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Cell index is not in 0..9.
    OutOfRange,
    /// Target cell already holds a mark.
    CellOccupied,
    /// The round is already won or drawn.
    GameOver,
    /// The mark offered is not the one whose turn it is.
    OutOfTurn,
    /// A scheduled move arrived after the board was reset.
    Stale,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::OutOfRange => write!(f, "Cell index is out of range"),
            MoveError::CellOccupied => write!(f, "Cell is already occupied"),
            MoveError::GameOver => write!(f, "Round is already over"),
            MoveError::OutOfTurn => write!(f, "Move made out of turn"),
            MoveError::Stale => write!(f, "Scheduled move is stale after a reset"),
        }
    }
}
