//! Minmax-Rust: a K-in-a-row minimax engine.
//!
//! This crate picks moves for tic-tac-toe style games on an NxN board where
//! K marks in a row, column or diagonal win. Move selection is an exhaustive
//! depth-limited minimax search with alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`constants`] - Default configuration and score values
//! - [`board`] - Board state, legal moves and win detection
//! - [`search`] - Minimax search with alpha-beta pruning
//! - [`game`] - Turn sequencing between the engine and a human
//! - [`playout`] - Random moves and random games
//! - [`protocol`] - Text protocol for playing from a terminal
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use minmax_rust::board::{Board, CellState, Pos};
//! use minmax_rust::search::Engine;
//!
//! let mut board = Board::from_rows(3, &["XX.", "OO.", "..."]).unwrap();
//! let mut engine = Engine::new(9);
//!
//! // Cross is the maximizing side and wins on the spot.
//! let result = engine.best_move(&mut board, true);
//! assert_eq!(result.best_move, Some(Pos::new(2, 0)));
//! assert_eq!(result.score, 1);
//!
//! // The board is handed back untouched.
//! assert_eq!(board.get(2, 0), Ok(CellState::Empty));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod playout;
pub mod protocol;
pub mod search;
