//! Win detection: five consecutive marks in a row, column or diagonal.

use crate::board::Snapshot;
use crate::common::{Cell, Mark};
use crate::config::WIN_LENGTH;

/// Scan directions, in the order they are tried for every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Down and to the right.
    DiagDown,
    /// Up and to the right.
    DiagUp,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DiagDown,
    Direction::DiagUp,
];

impl Direction {
    /// Step as `(dx, dy)`: columns then rows.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagDown => (1, 1),
            Direction::DiagUp => (1, -1),
        }
    }
}

/// A winning run of `WIN_LENGTH` marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub mark: Mark,
    pub direction: Direction,
    cells: [Cell; WIN_LENGTH],
}

impl Line {
    /// First cell of the run in scan order.
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> &[Cell; WIN_LENGTH] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// Cells of the run starting at `start` if the next `WIN_LENGTH - 1` steps
/// along `direction` all hold `mark`.
fn run_from(
    snapshot: &Snapshot,
    start: Cell,
    mark: Mark,
    direction: Direction,
) -> Option<[Cell; WIN_LENGTH]> {
    let (dx, dy) = direction.delta();
    let mut cells = [start; WIN_LENGTH];
    for step in 1..WIN_LENGTH {
        let next = start.offset(dx * step as isize, dy * step as isize)?;
        if snapshot.get(next) != Some(mark) {
            return None;
        }
        cells[step] = next;
    }
    Some(cells)
}

/// First winning line found scanning cells row-major, then directions in
/// [`DIRECTIONS`] order. Overlines are reported through their first five
/// cells.
pub fn find_five(snapshot: &Snapshot) -> Option<Line> {
    for start in Cell::all() {
        let Some(mark) = snapshot.get(start) else {
            continue;
        };
        for direction in DIRECTIONS {
            if let Some(cells) = run_from(snapshot, start, mark, direction) {
                return Some(Line {
                    mark,
                    direction,
                    cells,
                });
            }
        }
    }
    None
}

/// The mark that owns five in a row on `snapshot`, if any.
pub fn winner(snapshot: &Snapshot) -> Option<Mark> {
    find_five(snapshot).map(|line| line.mark)
}

/// A full board with no winner.
pub fn is_draw(snapshot: &Snapshot) -> bool {
    snapshot.is_full() && winner(snapshot).is_none()
}
