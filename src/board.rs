//! Square game board with K-in-a-row win detection.
//!
//! Cells are stored in a flat row-major buffer (`y * size + x`). Search code
//! mutates the board in place and undoes each move before returning, so no
//! per-node copies are made.

use std::fmt;

use crate::constants::{CHAR_CIRCLE, CHAR_CROSS, CHAR_EMPTY, DIRECTIONS, MAX_BOARD_SIZE};
use crate::error::BoardError;

/// Occupancy of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    /// Mark of the maximizing side.
    Cross,
    /// Mark of the minimizing side.
    Circle,
}

impl CellState {
    /// Mark placed by the maximizing (`true`) or minimizing (`false`) side.
    #[inline]
    pub fn for_side(maximizing: bool) -> Self {
        if maximizing {
            CellState::Cross
        } else {
            CellState::Circle
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CellState::Empty => CHAR_EMPTY,
            CellState::Cross => CHAR_CROSS,
            CellState::Circle => CHAR_CIRCLE,
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            CHAR_EMPTY => Some(CellState::Empty),
            CHAR_CROSS => Some(CellState::Cross),
            CHAR_CIRCLE => Some(CellState::Circle),
            _ => None,
        }
    }
}

/// A cell coordinate. Ordering is row-major: `y` first, then `x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    // `y` before `x`: the derived `Ord` depends on this field order.
    pub y: usize,
    pub x: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of inspecting a board for the end of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// A line of `win_length` marks exists for the given mark.
    Won(CellState),
    /// No line and no empty cell left.
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an empty `size`x`size` board where `win_length` marks in a row win.
    ///
    /// `size` is limited to [`MAX_BOARD_SIZE`].
    pub fn new(size: usize, win_length: usize) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidConfig { size, win_length };
        if size == 0 || size > MAX_BOARD_SIZE || win_length == 0 || win_length > size {
            return Err(invalid);
        }
        let cell_count = size.checked_mul(size).ok_or(invalid)?;
        Ok(Self {
            size,
            win_length,
            cells: vec![CellState::Empty; cell_count],
        })
    }

    /// Build a board from text rows (`X`, `O`, `.`), row `i` being `y = i`.
    ///
    /// Whitespace inside a row is ignored, so `"X . O"` and `"X.O"` are equal.
    pub fn from_rows(win_length: usize, rows: &[&str]) -> Result<Self, BoardError> {
        let mut board = Self::new(rows.len(), win_length)?;
        for (y, row) in rows.iter().enumerate() {
            let marks: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if marks.len() != board.size {
                return Err(BoardError::InvalidText {
                    reason: format!(
                        "row {y} has {} cells, expected {}",
                        marks.len(),
                        board.size
                    ),
                });
            }
            for (x, ch) in marks.into_iter().enumerate() {
                let state = CellState::from_char(ch).ok_or_else(|| BoardError::InvalidText {
                    reason: format!("unknown mark {ch:?} at ({x}, {y})"),
                })?;
                board.set(x, y, state)?;
            }
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// True if `(x, y)` lies on the board. Takes signed coordinates so
    /// neighbours of edge cells can be probed directly.
    #[inline]
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    fn check(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(self.idx(x, y))
    }

    pub fn get(&self, x: usize, y: usize) -> Result<CellState, BoardError> {
        let i = self.check(x, y)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), BoardError> {
        let i = self.check(x, y)?;
        self.cells[i] = state;
        Ok(())
    }

    pub fn get_pos(&self, pos: Pos) -> Result<CellState, BoardError> {
        self.get(pos.x, pos.y)
    }

    pub fn set_pos(&mut self, pos: Pos, state: CellState) -> Result<(), BoardError> {
        self.set(pos.x, pos.y, state)
    }

    /// Unchecked read for coordinates already known to be on the board.
    #[inline]
    fn at(&self, x: usize, y: usize) -> CellState {
        self.cells[self.idx(x, y)]
    }

    /// Write a cell at a position taken from [`Board::legal_moves`].
    #[inline]
    pub(crate) fn place(&mut self, pos: Pos, state: CellState) {
        let i = self.idx(pos.x, pos.y);
        self.cells[i] = state;
    }

    /// Every empty cell, in row-major order.
    ///
    /// Search relies on this order for tie-breaking between equal moves.
    pub fn legal_moves(&self) -> Vec<Pos> {
        let mut moves = Vec::with_capacity(self.cells.len());
        for y in 0..self.size {
            for x in 0..self.size {
                if self.at(x, y) == CellState::Empty {
                    moves.push(Pos::new(x, y));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != CellState::Empty)
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Mark owning the first `win_length` line found, or `Empty` if none.
    ///
    /// Occupied cells are visited in row-major order and each is tested as
    /// the start of a line in the four [`DIRECTIONS`]. Lines running the
    /// other way are found from their opposite end. A full board without a
    /// line also reports `Empty`; use [`Board::status`] to tell a draw apart.
    pub fn check_winner(&self) -> CellState {
        for y in 0..self.size {
            for x in 0..self.size {
                let state = self.at(x, y);
                if state == CellState::Empty {
                    continue;
                }
                for &(dx, dy) in &DIRECTIONS {
                    if self.line_from(x, y, dx, dy, state) {
                        return state;
                    }
                }
            }
        }
        CellState::Empty
    }

    fn line_from(&self, x: usize, y: usize, dx: isize, dy: isize, state: CellState) -> bool {
        (0..self.win_length as isize).all(|i| {
            let nx = x as isize + i * dx;
            let ny = y as isize + i * dy;
            self.in_bounds(nx, ny) && self.at(nx as usize, ny as usize) == state
        })
    }

    pub fn status(&self) -> GameStatus {
        match self.check_winner() {
            CellState::Empty if self.is_full() => GameStatus::Draw,
            CellState::Empty => GameStatus::InProgress,
            mark => GameStatus::Won(mark),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                write!(f, "{} ", self.at(x, y).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.win_length(), 3);
        assert_eq!(board.legal_moves().len(), 16);
        assert_eq!(board.check_winner(), CellState::Empty);
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Board::new(3, 4),
            Err(BoardError::InvalidConfig { size: 3, win_length: 4 })
        ));
        assert!(Board::new(0, 0).is_err());
        assert!(Board::new(3, 0).is_err());
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(Board::new(MAX_BOARD_SIZE, 3).is_ok());
        assert!(matches!(
            Board::new(MAX_BOARD_SIZE + 1, 3),
            Err(BoardError::InvalidConfig { .. })
        ));
        assert!(Board::new(MAX_BOARD_SIZE * 1000, 1).is_err());
        assert!(Board::new(usize::MAX, 1).is_err());
    }

    #[test]
    fn test_in_bounds() {
        let board = Board::new(3, 3).unwrap();
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(2, 2));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, -1));
        assert!(!board.in_bounds(3, 0));
        assert!(!board.in_bounds(0, 3));
    }

    #[test]
    fn test_get_set_out_of_bounds() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, 2, CellState::Cross).unwrap();
        assert_eq!(board.get(1, 2), Ok(CellState::Cross));
        assert_eq!(board.get(2, 1), Ok(CellState::Empty));
        assert_eq!(
            board.get(3, 0),
            Err(BoardError::OutOfBounds { x: 3, y: 0, size: 3 })
        );
        assert!(board.set(0, 5, CellState::Circle).is_err());
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::from_rows(3, &["X.O", ".X.", "O.."]).unwrap();
        let moves = board.legal_moves();
        assert_eq!(
            moves,
            vec![
                Pos::new(1, 0),
                Pos::new(0, 1),
                Pos::new(2, 1),
                Pos::new(1, 2),
                Pos::new(2, 2),
            ]
        );
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_winner_each_direction() {
        let rows = Board::from_rows(3, &["...", "OOO", "X.X"]).unwrap();
        assert_eq!(rows.check_winner(), CellState::Circle);

        let cols = Board::from_rows(3, &[".X.", "OX.", "OX."]).unwrap();
        assert_eq!(cols.check_winner(), CellState::Cross);

        let diag = Board::from_rows(3, &["X.O", ".XO", "..X"]).unwrap();
        assert_eq!(diag.check_winner(), CellState::Cross);

        let anti = Board::from_rows(3, &["X.O", ".O.", "O.X"]).unwrap();
        assert_eq!(anti.check_winner(), CellState::Circle);
    }

    #[test]
    fn test_no_winner_for_short_run() {
        let board = Board::from_rows(4, &["XXX.", "OOO.", "....", "...."]).unwrap();
        assert_eq!(board.check_winner(), CellState::Empty);
    }

    #[test]
    fn test_full_board_draw() {
        let board = Board::from_rows(3, &["XOX", "XOO", "OXX"]).unwrap();
        assert_eq!(board.check_winner(), CellState::Empty);
        assert!(board.legal_moves().is_empty());
        assert!(board.is_full());
        assert_eq!(board.status(), GameStatus::Draw);
    }

    #[test]
    fn test_win_length_one() {
        let mut board = Board::new(2, 1).unwrap();
        assert_eq!(board.check_winner(), CellState::Empty);
        board.set(1, 1, CellState::Circle).unwrap();
        assert_eq!(board.check_winner(), CellState::Circle);
    }

    #[test]
    fn test_from_rows_rejects_bad_text() {
        assert!(matches!(
            Board::from_rows(3, &["XO", "...", "..."]),
            Err(BoardError::InvalidText { .. })
        ));
        assert!(matches!(
            Board::from_rows(3, &["X?O", "...", "..."]),
            Err(BoardError::InvalidText { .. })
        ));
    }

    #[test]
    fn test_clear_and_display() {
        let mut board = Board::from_rows(3, &["X O .", ". X .", ". . O"]).unwrap();
        assert_eq!(board.to_string(), "X O . \n. X . \n. . O \n");
        board.clear();
        assert_eq!(board, Board::new(3, 3).unwrap());
    }
}
