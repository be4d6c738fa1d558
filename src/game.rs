//! Turn sequencing around a [`Board`].
//!
//! A [`Game`] owns the board between turns, tracks which side is to move and
//! which side the engine plays, and applies engine and human moves. Cross
//! (the maximizing side) always moves first.

use tracing::{debug, info};

use crate::board::{Board, CellState, GameStatus, Pos};
use crate::constants::{DEFAULT_BOARD_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_WIN_LENGTH};
use crate::error::{BoardError, GameError};
use crate::search::Engine;

/// Per-game settings, fixed before play begins.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub win_length: usize,
    /// Search depth ceiling in plies
    pub max_depth: usize,
    /// Whether the engine plays Cross (true) or Circle (false)
    pub engine_maximizes: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
            engine_maximizes: true,
        }
    }
}

pub struct Game {
    board: Board,
    engine: Engine,
    engine_maximizes: bool,
    /// Side to move: true while Cross is to move
    maximizing: bool,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.size, config.win_length)?;
        Ok(Self::with_board(board, config.max_depth, config.engine_maximizes, true))
    }

    /// Continue a game from an existing position with `maximizing` to move.
    pub fn with_board(
        board: Board,
        max_depth: usize,
        engine_maximizes: bool,
        maximizing: bool,
    ) -> Self {
        Self {
            board,
            engine: Engine::new(max_depth),
            engine_maximizes,
            maximizing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// True while Cross is to move.
    pub fn maximizing(&self) -> bool {
        self.maximizing
    }

    /// Mark of the side to move.
    pub fn side_to_move(&self) -> CellState {
        CellState::for_side(self.maximizing)
    }

    pub fn engine_mark(&self) -> CellState {
        CellState::for_side(self.engine_maximizes)
    }

    pub fn engine_to_move(&self) -> bool {
        self.maximizing == self.engine_maximizes
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Clear the board and give the move back to Cross.
    pub fn reset(&mut self) {
        self.board.clear();
        self.maximizing = true;
    }

    /// Let the engine choose and play a move for the side to move.
    ///
    /// Returns `Ok(None)` when the search finds no move; nothing is played
    /// and the turn does not pass.
    pub fn play_engine_move(&mut self) -> Result<Option<Pos>, GameError> {
        if self.status().is_over() {
            return Err(GameError::GameOver);
        }
        let result = self.engine.best_move(&mut self.board, self.maximizing);
        let Some(mv) = result.best_move else {
            debug!("engine found no move");
            return Ok(None);
        };
        self.apply(mv)?;
        Ok(Some(mv))
    }

    /// Play a move chosen outside the engine for the side to move.
    pub fn play_human_move(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        if self.status().is_over() {
            return Err(GameError::GameOver);
        }
        if self.board.get(x, y)? != CellState::Empty {
            return Err(GameError::Occupied { x, y });
        }
        self.apply(Pos::new(x, y))
    }

    fn apply(&mut self, mv: Pos) -> Result<(), GameError> {
        let mark = self.side_to_move();
        self.board.set_pos(mv, mark)?;
        self.maximizing = !self.maximizing;
        debug!("{} plays {mv}", mark.to_char());

        match self.status() {
            GameStatus::Won(winner) => info!("game over: {} wins", winner.to_char()),
            GameStatus::Draw => info!("game over: draw"),
            GameStatus::InProgress => {}
        }
        Ok(())
    }
}
