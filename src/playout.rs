//! Random playouts.
//!
//! A random player picks uniformly among the empty cells. It serves as a weak
//! opponent for self-play and as a source of arbitrary positions in tests.

use fastrand::Rng;

use crate::board::{Board, CellState, GameStatus, Pos};

/// Pick a uniformly random empty cell, or `None` on a full board.
pub fn random_move(board: &Board, rng: &mut Rng) -> Option<Pos> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Play random moves until the game is won or drawn.
///
/// `maximizing` is the side to move first (Cross when true). The board is
/// left in its final position.
pub fn playout(board: &mut Board, mut maximizing: bool, rng: &mut Rng) -> GameStatus {
    loop {
        let status = board.status();
        if status.is_over() {
            return status;
        }
        // In progress implies at least one empty cell.
        let Some(mv) = random_move(board, rng) else {
            return status;
        };
        board.place(mv, CellState::for_side(maximizing));
        maximizing = !maximizing;
    }
}
