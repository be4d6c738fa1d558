//! Error types for board and game operations.

use thiserror::Error;

/// Errors raised by [`Board`](crate::board::Board) construction and cell access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimensions that cannot describe a game.
    #[error("invalid board configuration: size {size}, win length {win_length}")]
    InvalidConfig { size: usize, win_length: usize },

    /// Cell coordinates outside the board.
    #[error("position ({x}, {y}) is outside a {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    /// Unparseable board text.
    #[error("invalid board text: {reason}")]
    InvalidText { reason: String },
}

/// Errors raised while sequencing a [`Game`](crate::game::Game).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board configuration or access error.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The target cell already holds a mark.
    #[error("position ({x}, {y}) is already occupied")]
    Occupied { x: usize, y: usize },

    /// The game has been won or drawn.
    #[error("game is already over")]
    GameOver,
}
