//! Immutable board snapshots, one bitboard per mark.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Mark};
use crate::config::{BOARD_SIZE, CELL_COUNT};

/// Occupancy bitboard sized for the game board.
pub type BB = BitBoard<u16, BOARD_SIZE>;

/// A complete board state at one point of the game.
///
/// Snapshots are never mutated in place: placing a mark produces a new
/// snapshot via [`Snapshot::with_mark`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    x: BB,
    o: BB,
}

impl Snapshot {
    /// The empty board.
    pub fn empty() -> Self {
        Self {
            x: BB::new(),
            o: BB::new(),
        }
    }

    /// Mark at `cell`, if any.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        if self.x.get(cell.row(), cell.col()).unwrap_or(false) {
            Some(Mark::X)
        } else if self.o.get(cell.row(), cell.col()).unwrap_or(false) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Mark at row-major `index`.
    pub fn get_index(&self, index: usize) -> Result<Option<Mark>, BoardError> {
        Ok(self.get(Cell::from_index(index)?))
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Copy of this snapshot with `mark` placed on `cell`.
    pub fn with_mark(&self, cell: Cell, mark: Mark) -> Result<Snapshot, BoardError> {
        if self.is_occupied(cell) {
            return Err(BoardError::CellOccupied(cell));
        }
        let mut next = *self;
        match mark {
            Mark::X => next.x.set(cell.row(), cell.col())?,
            Mark::O => next.o.set(cell.row(), cell.col())?,
        }
        Ok(next)
    }

    /// Bitboard of the cells holding `mark`.
    pub fn stones(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.stones(mark).count_ones()
    }

    /// Bitboard of every occupied cell.
    pub fn occupied(&self) -> BB {
        self.x | self.o
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Unoccupied cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&c| !self.is_occupied(c))
    }

    /// Flat row-major view of the board.
    pub fn to_cells(&self) -> [Option<Mark>; CELL_COUNT] {
        core::array::from_fn(|i| self.get_index(i).ok().flatten())
    }

    /// Build a snapshot from a flat row-major view.
    pub fn from_cells(cells: &[Option<Mark>; CELL_COUNT]) -> Self {
        let mut snapshot = Self::empty();
        for (cell, mark) in Cell::all().zip(cells.iter()) {
            match mark {
                Some(Mark::X) => snapshot.x.set(cell.row(), cell.col()).unwrap_or(()),
                Some(Mark::O) => snapshot.o.set(cell.row(), cell.col()).unwrap_or(()),
                None => {}
            }
        }
        snapshot
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = Cell::new(row, col)
                    .ok()
                    .and_then(|c| self.get(c))
                    .map_or('.', Mark::symbol);
                write!(f, "{}", ch)?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Snapshot {{ x: {}, o: {} }}",
            self.count(Mark::X),
            self.count(Mark::O)
        )?;
        write!(f, "{}", self)
    }
}
