//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Scores are exact game values from the maximizing side's point of view:
//! `+1` for a Cross win, `-1` for a Circle win and `0` for everything else.
//! Non-terminal leaves at the depth ceiling are deliberately scored `0`;
//! there is no positional heuristic.
//!
//! The board is used as scratch space. Each candidate move is placed,
//! searched and removed again, so the board is unchanged when the search
//! returns.

use tracing::debug;

use crate::board::{Board, CellState, Pos};
use crate::constants::{DEFAULT_MAX_DEPTH, SCORE_LOSS, SCORE_NEUTRAL, SCORE_WIN};

/// Score and move produced by a search call.
///
/// `best_move` is only meaningful at the root. It is `None` when the node is
/// a leaf: no empty cell, depth budget spent, or the game already decided.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Pos>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Minimax search engine.
pub struct Engine {
    /// Ply at which the search stops deepening
    max_depth: usize,
    /// Nodes visited since the last root call
    nodes: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Engine {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            nodes: 0,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// Number of nodes visited by the most recent [`Engine::best_move`] call.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search the position from the root with the widest window.
    pub fn best_move(&mut self, board: &mut Board, maximizing: bool) -> SearchResult {
        self.nodes = 0;
        let result = self.search(board, 0, i32::MIN, i32::MAX, maximizing);
        match result.best_move {
            Some(mv) => debug!(
                "move {mv}, score {}, nodes {}",
                result.score, self.nodes
            ),
            None => debug!("no move available, score {}", result.score),
        }
        result
    }

    /// Minimax value of `board` at ply `depth` within the `(alpha, beta)` window.
    ///
    /// `depth` counts plies from the root; anything at or past the engine's
    /// ceiling is a leaf. Equal-valued moves resolve to the first one in
    /// row-major order.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.nodes += 1;

        let moves = board.legal_moves();
        if depth >= self.max_depth || moves.is_empty() {
            return SearchResult::leaf(SCORE_NEUTRAL);
        }

        match board.check_winner() {
            CellState::Cross => return SearchResult::leaf(SCORE_WIN),
            CellState::Circle => return SearchResult::leaf(SCORE_LOSS),
            CellState::Empty => {}
        }

        let mark = CellState::for_side(maximizing);
        let mut best = SearchResult::leaf(if maximizing { i32::MIN } else { i32::MAX });

        for mv in moves {
            board.place(mv, mark);
            let score = self.search(board, depth + 1, alpha, beta, !maximizing).score;
            board.place(mv, CellState::Empty);

            if (maximizing && score > best.score) || (!maximizing && score < best.score) {
                best = SearchResult {
                    score,
                    best_move: Some(mv),
                };
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}
