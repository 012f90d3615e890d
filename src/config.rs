//! Fixed game constants: board geometry, win patterns, strategy tuning.

/// Number of cells on the 3x3 board, indexed 0-8 in row-major order.
pub const NUM_CELLS: usize = 9;

/// The 8 index triples that constitute a win: 3 rows, 3 columns, 2 diagonals.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Center cell, preferred first by the positional heuristic.
pub const CENTER: usize = 4;

/// Corner cells in ascending index order.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge cells in ascending index order.
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Fork detection is skipped once fewer than this many cells remain empty.
pub const FORK_MIN_EMPTY: usize = 5;

/// Thinking-pause ranges in milliseconds per tier, `[lo, hi)`.
pub const EASY_DELAY_MS: (u64, u64) = (400, 1000);
pub const MEDIUM_DELAY_MS: (u64, u64) = (600, 1600);
pub const HARD_DELAY_MS: (u64, u64) = (800, 2000);
