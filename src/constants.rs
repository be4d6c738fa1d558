//! Default game configuration and score values.
//!
//! The board size, win length and search depth are runtime values carried by
//! [`GameConfig`](crate::game::GameConfig); the constants here are only the
//! defaults used when nothing else is specified.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Largest accepted board size.
pub const MAX_BOARD_SIZE: usize = 64;

/// Default number of marks in a row needed to win.
pub const DEFAULT_WIN_LENGTH: usize = 3;

/// Line directions scanned from every occupied cell as `(dx, dy)`.
/// Order: horizontal, vertical, rising diagonal, falling diagonal.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth ceiling in plies.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Score of a position won by the maximizing side.
pub const SCORE_WIN: i32 = 1;

/// Score of a position won by the minimizing side.
pub const SCORE_LOSS: i32 = -1;

/// Score of every non-terminal leaf and of a drawn position.
pub const SCORE_NEUTRAL: i32 = 0;

// =============================================================================
// Text Rendering
// =============================================================================

/// Character used for a cross (maximizing side).
pub const CHAR_CROSS: char = 'X';

/// Character used for a circle (minimizing side).
pub const CHAR_CIRCLE: char = 'O';

/// Character used for an empty cell.
pub const CHAR_EMPTY: char = '.';
