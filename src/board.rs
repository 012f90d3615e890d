//! Board value type: 9 cells, win/draw detection, empty-cell enumeration.

use crate::common::{MoveError, RoundOutcome};
use crate::config::{NUM_CELLS, WIN_PATTERNS};
use core::fmt;

/// One of the two symbols a player holds for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 3x3 board in row-major order. A plain `Copy` value: strategy lookahead
/// works on scratch copies instead of mutate-and-undo, so nothing here has
/// hidden side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Option<Mark>; NUM_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [None; NUM_CELLS],
        }
    }

    /// Mark occupying `index`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Place `mark` at `index`. A cell once set is never overwritten during a
    /// round; failed placements leave the board untouched.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        let cell = self.cells.get_mut(index).ok_or(MoveError::OutOfRange)?;
        if cell.is_some() {
            return Err(MoveError::CellOccupied);
        }
        *cell = Some(mark);
        Ok(())
    }

    /// Pure predicate: `true` iff some win pattern is fully held by `mark`.
    pub fn check_win(&self, mark: Mark) -> bool {
        WIN_PATTERNS
            .iter()
            .any(|pattern| pattern.iter().all(|&i| self.cells[i] == Some(mark)))
    }

    /// First win pattern fully held by `mark`, for presentation layers that
    /// highlight the winning line.
    pub fn winning_pattern(&self, mark: Mark) -> Option<[usize; 3]> {
        WIN_PATTERNS
            .iter()
            .copied()
            .find(|pattern| pattern.iter().all(|&i| self.cells[i] == Some(mark)))
    }

    /// Unoccupied indices in ascending order, recomputed from the current
    /// board on every call.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Derive the round outcome. Win is checked before draw so that a move
    /// completing a line on the last empty cell is scored as a win.
    pub fn outcome(&self) -> RoundOutcome {
        for mark in [Mark::X, Mark::O] {
            if self.check_win(mark) {
                return RoundOutcome::Win(mark);
            }
        }
        if self.is_full() {
            RoundOutcome::Draw
        } else {
            RoundOutcome::InProgress
        }
    }

    /// Clear every cell back to empty for the next round.
    pub fn clear(&mut self) {
        self.cells = [None; NUM_CELLS];
    }
}
