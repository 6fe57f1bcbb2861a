//! Move history and time travel between prior board states.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, info};

use crate::{
    board::Snapshot,
    common::{Cell, Mark},
    rules::{self, Line},
};

/// Result of trying to place a mark. Only `Placed` changes the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed; `move_number` is the new history position.
    Placed {
        cell: Cell,
        mark: Mark,
        move_number: usize,
    },
    /// The target cell already holds a mark.
    Occupied,
    /// The displayed position already has a winner.
    GameOver,
    /// The cell index is outside the board.
    OutOfBounds,
}

impl MoveOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Status line for the displayed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Winner(Mark),
    Draw,
    NextPlayer(Mark),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(mark) => write!(f, "Winner: {}", mark),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// Serializable game record: every move in history order plus the
/// displayed position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Row-major cell indices, one per move.
    pub moves: Vec<u8>,
    pub current: usize,
}

/// Errors raised when rebuilding a history from a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Replaying move `move_number` (1-based) at `index` was rejected.
    IllegalMove { move_number: usize, index: usize },
    /// The displayed position is past the end of the history.
    PointerOutOfRange { current: usize, len: usize },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::IllegalMove { move_number, index } => {
                write!(f, "Move #{} at cell index {} is illegal", move_number, index)
            }
            HistoryError::PointerOutOfRange { current, len } => {
                write!(f, "Current move {} is outside a history of {}", current, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HistoryError {}

/// Label of the history entry for `move_number`.
pub fn describe_move(move_number: usize) -> String {
    if move_number > 0 {
        format!("Go to move #{}", move_number)
    } else {
        String::from("Go to game start")
    }
}

/// Ordered board snapshots with a pointer to the displayed one.
///
/// `snapshots[0]` is always the empty board and each later snapshot adds
/// exactly one mark, alternating `X`, `O`, `X`, ... The pointer always
/// indexes an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Snapshot>,
    current: usize,
}

impl GameHistory {
    pub fn new() -> Self {
        Self {
            snapshots: alloc::vec![Snapshot::empty()],
            current: 0,
        }
    }

    /// Place the next mark at row-major `index`.
    ///
    /// Any snapshots after the displayed one are discarded first. Rejected
    /// moves leave the history and pointer untouched.
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        match Cell::from_index(index) {
            Ok(cell) => self.play(cell),
            Err(_) => {
                debug!("rejected move at index {}: out of bounds", index);
                MoveOutcome::OutOfBounds
            }
        }
    }

    /// Place the next mark on `cell`. See [`GameHistory::apply_move`].
    pub fn play(&mut self, cell: Cell) -> MoveOutcome {
        let current = *self.current();
        if let Some(mark) = rules::winner(&current) {
            debug!("rejected move at {}: {} already won", cell, mark);
            return MoveOutcome::GameOver;
        }
        let mark = self.next_mark();
        let Ok(next) = current.with_mark(cell, mark) else {
            debug!("rejected move at {}: occupied", cell);
            return MoveOutcome::Occupied;
        };
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;
        debug!("{} plays {} (move #{})", mark, cell, self.current);
        if rules::winner(&next) == Some(mark) {
            info!("{} wins on move #{}", mark, self.current);
        }
        MoveOutcome::Placed {
            cell,
            mark,
            move_number: self.current,
        }
    }

    /// Display snapshot `move_number`. Returns `false` and does nothing if
    /// it is not in the history.
    pub fn jump_to(&mut self, move_number: usize) -> bool {
        if move_number >= self.snapshots.len() {
            debug!(
                "rejected jump to move #{}: history has {} entries",
                move_number,
                self.snapshots.len()
            );
            return false;
        }
        debug!("jump to move #{}", move_number);
        self.current = move_number;
        true
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of snapshots, including the empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.current]
    }

    pub fn snapshot(&self, move_number: usize) -> Option<&Snapshot> {
        self.snapshots.get(move_number)
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Mark of the player to act on the displayed position.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current)
    }

    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self.current())
    }

    /// The winning line on the displayed position, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::find_five(self.current())
    }

    pub fn status(&self) -> GameStatus {
        let current = self.current();
        if let Some(mark) = rules::winner(current) {
            GameStatus::Winner(mark)
        } else if current.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_mark())
        }
    }

    /// Labels for every history entry, in order.
    pub fn move_descriptions(&self) -> Vec<String> {
        (0..self.snapshots.len()).map(describe_move).collect()
    }

    /// The cell and mark added by each snapshot after the first.
    pub fn moves(&self) -> Vec<(Cell, Mark)> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| {
                let added = pair[1].occupied() & !pair[0].occupied();
                let (row, col) = added.iter_set_bits().next()?;
                let cell = Cell::new(row, col).ok()?;
                Some((cell, pair[1].get(cell)?))
            })
            .collect()
    }

    /// Serializable record of the whole history.
    pub fn state(&self) -> GameState {
        GameState {
            moves: self
                .moves()
                .iter()
                .map(|(cell, _)| cell.index() as u8)
                .collect(),
            current: self.current,
        }
    }

    /// Rebuild a history by replaying `state.moves`.
    pub fn from_state(state: &GameState) -> Result<Self, HistoryError> {
        let mut history = Self::new();
        for (i, &index) in state.moves.iter().enumerate() {
            if !history.apply_move(index as usize).is_placed() {
                return Err(HistoryError::IllegalMove {
                    move_number: i + 1,
                    index: index as usize,
                });
            }
        }
        if !history.jump_to(state.current) {
            return Err(HistoryError::PointerOutOfRange {
                current: state.current,
                len: history.len(),
            });
        }
        Ok(history)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Value-style move application over a snapshot list and pointer.
///
/// Returns the new list and pointer; rejected moves, and a pointer outside
/// `history`, return both unchanged.
pub fn apply_move(history: &[Snapshot], pointer: usize, index: usize) -> (Vec<Snapshot>, usize) {
    if pointer >= history.len() {
        return (history.to_vec(), pointer);
    }
    let mut game = GameHistory {
        snapshots: history.to_vec(),
        current: pointer,
    };
    game.apply_move(index);
    (game.snapshots, game.current)
}

/// Value-style jump: `target` if it indexes `history`, else `pointer`.
pub fn jump_to(history: &[Snapshot], pointer: usize, target: usize) -> usize {
    if target < history.len() {
        target
    } else {
        pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(indices: &[usize]) -> GameHistory {
        let mut game = GameHistory::new();
        for &i in indices {
            assert!(game.apply_move(i).is_placed(), "move at {} rejected", i);
        }
        game
    }

    #[test]
    fn starts_with_empty_board() {
        let game = GameHistory::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.current_move(), 0);
        assert!(game.current().is_empty());
        assert_eq!(game.status(), GameStatus::NextPlayer(Mark::X));
    }

    #[test]
    fn marks_alternate_from_x() {
        let game = played(&[0, 20, 40]);
        let marks: Vec<_> = game.moves().iter().map(|(_, m)| *m).collect();
        assert_eq!(marks, vec![Mark::X, Mark::O, Mark::X]);
        assert_eq!(game.status().to_string(), "Next player: O");
    }

    #[test]
    fn occupied_cell_is_noop() {
        let mut game = played(&[10]);
        let before = game.clone();
        assert_eq!(game.apply_move(10), MoveOutcome::Occupied);
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_bounds_is_noop() {
        let mut game = played(&[10]);
        let before = game.clone();
        assert_eq!(game.apply_move(225), MoveOutcome::OutOfBounds);
        assert_eq!(game, before);
    }

    #[test]
    fn jump_then_move_truncates() {
        let mut game = played(&[0, 20, 40, 60]);
        assert!(game.jump_to(1));
        assert_eq!(game.len(), 5);
        assert!(game.apply_move(100).is_placed());
        assert_eq!(game.len(), 3);
        assert_eq!(game.current_move(), 2);
        assert_eq!(game.moves()[1].0, Cell::from_index(100).unwrap());
    }

    #[test]
    fn jump_past_end_is_rejected() {
        let mut game = played(&[0, 20]);
        assert!(!game.jump_to(3));
        assert_eq!(game.current_move(), 2);
    }

    #[test]
    fn descriptions_match_labels() {
        let game = played(&[0, 20]);
        assert_eq!(
            game.move_descriptions(),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }

    #[test]
    fn win_blocks_further_moves_but_not_jumps() {
        // X on row 0, O on row 1
        let mut game = played(&[0, 15, 1, 16, 2, 17, 3, 18, 4]);
        assert_eq!(game.status(), GameStatus::Winner(Mark::X));
        let before = game.clone();
        assert_eq!(game.apply_move(100), MoveOutcome::GameOver);
        assert_eq!(game, before);
        assert!(game.jump_to(8));
        assert_eq!(game.status(), GameStatus::NextPlayer(Mark::X));
    }

    #[test]
    fn value_style_matches_store() {
        let game = played(&[0, 20, 40]);
        let (snaps, pointer) = apply_move(game.snapshots(), 1, 7);
        assert_eq!(snaps.len(), 3);
        assert_eq!(pointer, 2);
        assert_eq!(snaps[2].get_index(7).unwrap(), Some(Mark::O));

        let (same, p) = apply_move(game.snapshots(), 3, 0);
        assert_eq!(same.as_slice(), game.snapshots());
        assert_eq!(p, 3);

        assert_eq!(jump_to(game.snapshots(), 3, 0), 0);
        assert_eq!(jump_to(game.snapshots(), 3, 9), 3);
    }

    #[test]
    fn state_roundtrip_keeps_future() {
        let mut game = played(&[0, 20, 40, 60]);
        game.jump_to(2);
        let restored = GameHistory::from_state(&game.state()).unwrap();
        assert_eq!(restored, game);
    }

    #[test]
    fn from_state_rejects_bad_records() {
        let repeated = GameState {
            moves: vec![5, 5],
            current: 2,
        };
        assert_eq!(
            GameHistory::from_state(&repeated),
            Err(HistoryError::IllegalMove {
                move_number: 2,
                index: 5
            })
        );
        let pointer = GameState {
            moves: vec![5],
            current: 2,
        };
        assert_eq!(
            GameHistory::from_state(&pointer),
            Err(HistoryError::PointerOutOfRange { current: 2, len: 2 })
        );
    }
}
