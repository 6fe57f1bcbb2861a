//! Common types for Gomoku: marks, cell coordinates and board errors.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::BitBoardError;
use crate::config::{BOARD_SIZE, CELL_COUNT};

/// A player's mark. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark of the player acting from history position `move_number`.
    pub fn for_move(move_number: usize) -> Self {
        if move_number % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A validated board coordinate.
///
/// Displayed and parsed in column-letter/row-number notation, e.g. `H8` is
/// row 7, column 7 (the centre of the board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::CoordOutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Cell at row-major `index` (`row * BOARD_SIZE + col`).
    pub fn from_index(index: usize) -> Result<Self, BoardError> {
        if index >= CELL_COUNT {
            return Err(BoardError::IndexOutOfBounds { index });
        }
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// The centre of the board.
    pub fn center() -> Self {
        let mid = (BOARD_SIZE / 2) as u8;
        Self { row: mid, col: mid }
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(|i| Cell::from_index(i).ok())
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Cell reached by moving `dx` columns and `dy` rows, if still on the board.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Cell> {
        let col = self.col as isize + dx;
        let row = self.row as isize + dy;
        if col < 0 || row < 0 {
            return None;
        }
        Cell::new(row as usize, col as usize).ok()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Cell {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_ch = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or(BoardError::InvalidCoordinate)?
            .to_ascii_uppercase();
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoardError::InvalidCoordinate);
        }
        let row: usize = digits.parse().map_err(|_| BoardError::InvalidCoordinate)?;
        if row == 0 {
            return Err(BoardError::InvalidCoordinate);
        }
        let col = (col_ch as u8 - b'A') as usize;
        Cell::new(row - 1, col)
    }
}

/// Errors returned by board and coordinate operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Row-major index outside `0..CELL_COUNT`.
    IndexOutOfBounds { index: usize },
    /// Row or column outside the board.
    CoordOutOfBounds { row: usize, col: usize },
    /// Text could not be parsed as a coordinate.
    InvalidCoordinate,
    /// The cell already holds a mark.
    CellOccupied(Cell),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::IndexOutOfBounds { index } => {
                write!(f, "Cell index {} is out of range", index)
            }
            BoardError::CoordOutOfBounds { row, col } => {
                write!(f, "Coordinate row={}, col={} is off the board", row, col)
            }
            BoardError::InvalidCoordinate => write!(f, "Invalid coordinate"),
            BoardError::CellOccupied(cell) => write!(f, "Cell {} is already occupied", cell),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
