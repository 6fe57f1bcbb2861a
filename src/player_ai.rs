use crate::{ai, game::GameHistory};
use rand::rngs::SmallRng;

use crate::player::{Action, Player};

/// Computer player driven by [`ai::choose_cell`].
///
/// Passes when the displayed position is finished, so the other player can
/// still jump through the history.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn next_action(&mut self, rng: &mut SmallRng, game: &GameHistory) -> Action {
        if game.status().is_over() {
            return Action::Pass;
        }
        ai::choose_cell(game.current(), game.next_mark(), rng)
            .map(Action::Place)
            .unwrap_or(Action::Pass)
    }
}
