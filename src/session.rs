//! Turn loop driving two players over a shared history.

use alloc::boxed::Box;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    common::Mark,
    game::GameHistory,
    player::{Action, Player},
};

fn seat_of(mark: Mark) -> usize {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}

/// Two players taking turns on one [`GameHistory`].
///
/// The turn moves to the owner of the mark to play only after a mark is
/// placed. Jumps and rejected placements keep the turn with the player who
/// made them, and a `Pass` hands it to the other seat.
pub struct Session {
    game: GameHistory,
    players: [Box<dyn Player>; 2],
}

impl Session {
    /// `x` moves first.
    pub fn new(x: Box<dyn Player>, o: Box<dyn Player>) -> Self {
        Self::with_game(GameHistory::new(), x, o)
    }

    /// Resume an existing history.
    pub fn with_game(game: GameHistory, x: Box<dyn Player>, o: Box<dyn Player>) -> Self {
        Self {
            game,
            players: [x, o],
        }
    }

    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    pub fn into_game(self) -> GameHistory {
        self.game
    }

    /// Run until a player quits or both players pass in a row. `rngs[0]` is
    /// handed to `X`, `rngs[1]` to `O`. `on_action` sees the history after
    /// each placement or jump.
    ///
    /// Returns the number of placements and jumps taken.
    pub fn run<F>(&mut self, rngs: &mut [SmallRng; 2], mut on_action: F) -> usize
    where
        F: FnMut(&GameHistory),
    {
        let mut actions = 0;
        let mut seat = seat_of(self.game.next_mark());
        let mut passes = 0;
        loop {
            let action = self.players[seat].next_action(&mut rngs[seat], &self.game);
            match action {
                Action::Quit => {
                    info!(
                        "seat {} left the game at move #{}: {}",
                        seat,
                        self.game.current_move(),
                        self.game.status()
                    );
                    return actions;
                }
                Action::Pass => {
                    passes += 1;
                    if passes >= 2 {
                        info!(
                            "both players passed at move #{}: {}",
                            self.game.current_move(),
                            self.game.status()
                        );
                        return actions;
                    }
                    seat = 1 - seat;
                    continue;
                }
                Action::Place(cell) => {
                    let outcome = self.game.play(cell);
                    self.players[seat].handle_outcome(cell, outcome);
                    if outcome.is_placed() {
                        seat = seat_of(self.game.next_mark());
                    }
                }
                Action::Jump(move_number) => {
                    if !self.game.jump_to(move_number) {
                        debug!("ignored jump to move #{}", move_number);
                    }
                }
            }
            passes = 0;
            actions += 1;
            on_action(&self.game);
        }
    }
}
