// Move selection for the computer opponent.
// Uses no_std; the candidate list is the only heap allocation.

use alloc::vec::Vec;

use crate::{
    board::Snapshot,
    common::{Cell, Mark},
    config::WIN_LENGTH,
    rules::DIRECTIONS,
};
use rand::Rng;

/// Length of the unbroken run of `mark` starting next to `cell` and
/// walking `(dx, dy)`.
fn run_length(snapshot: &Snapshot, cell: Cell, mark: Mark, dx: isize, dy: isize) -> usize {
    let mut len = 0;
    let mut at = cell;
    while len < WIN_LENGTH - 1 {
        match at.offset(dx, dy) {
            Some(next) if snapshot.get(next) == Some(mark) => {
                len += 1;
                at = next;
            }
            _ => break,
        }
    }
    len
}

/// Heuristic value of placing on the empty `cell` for `mark`.
///
/// Each direction contributes the square of the line it would extend, both
/// for our own marks and for the opponent's (blocking value). Our own lines
/// are weighted slightly higher so that attack wins ties with defence.
pub fn score_cell(snapshot: &Snapshot, cell: Cell, mark: Mark) -> u32 {
    let mut score = 0u32;
    for direction in DIRECTIONS {
        let (dx, dy) = direction.delta();
        let own = run_length(snapshot, cell, mark, dx, dy)
            + run_length(snapshot, cell, mark, -dx, -dy);
        let theirs = run_length(snapshot, cell, mark.opponent(), dx, dy)
            + run_length(snapshot, cell, mark.opponent(), -dx, -dy);
        score += 3 * (own * own) as u32 + 2 * (theirs * theirs) as u32;
    }
    score
}

/// Whether placing `mark` on the empty `cell` completes a line of
/// `WIN_LENGTH` through it.
pub fn completes_five(snapshot: &Snapshot, cell: Cell, mark: Mark) -> bool {
    DIRECTIONS.iter().any(|direction| {
        let (dx, dy) = direction.delta();
        1 + run_length(snapshot, cell, mark, dx, dy) + run_length(snapshot, cell, mark, -dx, -dy)
            >= WIN_LENGTH
    })
}

/// An empty cell that gives `mark` five in a row, if one exists.
pub fn winning_cell(snapshot: &Snapshot, mark: Mark) -> Option<Cell> {
    snapshot
        .empty_cells()
        .find(|&cell| completes_five(snapshot, cell, mark))
}

/// Choose a cell for `mark`, or `None` when the board is full.
///
/// Priority: complete our own five, block the opponent's five, then the
/// highest [`score_cell`] with ties broken at random. An empty board opens
/// in the centre.
pub fn choose_cell<R: Rng + ?Sized>(snapshot: &Snapshot, mark: Mark, rng: &mut R) -> Option<Cell> {
    if snapshot.is_empty() {
        return Some(Cell::center());
    }
    if let Some(cell) = winning_cell(snapshot, mark) {
        return Some(cell);
    }
    if let Some(cell) = winning_cell(snapshot, mark.opponent()) {
        return Some(cell);
    }

    let mut best = 0u32;
    let mut candidates: Vec<Cell> = Vec::new();
    for cell in snapshot.empty_cells() {
        let score = score_cell(snapshot, cell, mark);
        if score > best || candidates.is_empty() {
            best = score;
            candidates.clear();
            candidates.push(cell);
        } else if score == best {
            candidates.push(cell);
        }
    }
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
