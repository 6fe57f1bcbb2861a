use crate::{
    common::Cell,
    game::{GameHistory, MoveOutcome},
};
use rand::rngs::SmallRng;

/// What a player wants to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the next mark on a cell.
    Place(Cell),
    /// Display an earlier (or later) history entry.
    Jump(usize),
    /// Hand the turn to the other player without acting.
    Pass,
    /// Leave the game.
    Quit,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose an action for the displayed position of `game`.
    fn next_action(&mut self, rng: &mut SmallRng, game: &GameHistory) -> Action;

    /// Inform the player of the result of its last placement.
    fn handle_outcome(&mut self, _cell: Cell, _outcome: MoveOutcome) {}
}
