#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    ai,
    common::Cell,
    game::{GameHistory, MoveOutcome},
    ui,
};
use rand::rngs::SmallRng;

use crate::player::{Action, Player};

/// Parse one line of player input.
///
/// Accepts a coordinate (`H8`), `jump N` / `j N`, `start`, or `quit` /
/// `q` / `exit`. An empty line is not a command.
pub fn parse_command(input: &str) -> Option<Action> {
    let line = input.trim();
    let mut parts = line.split_whitespace();
    let head = parts.next()?.to_ascii_lowercase();
    let action = match head.as_str() {
        "quit" | "q" | "exit" => Action::Quit,
        "start" => Action::Jump(0),
        "jump" | "j" => Action::Jump(parts.next()?.trim_start_matches('#').parse().ok()?),
        _ => Action::Place(head.parse::<Cell>().ok()?),
    };
    if parts.next().is_some() {
        return None;
    }
    Some(action)
}

/// Input prompt, with the suggested cell as the default answer.
pub fn prompt(hint: Option<Cell>) -> String {
    match hint {
        Some(cell) => std::format!("Command (H8, jump N, quit) [{}]: ", cell),
        None => String::from("Command (H8, jump N, quit): "),
    }
}

/// Interactive player reading commands from stdin.
pub struct CliPlayer {
    /// Show the AI's preferred cell as the default answer.
    hints: bool,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self { hints: false }
    }

    pub fn with_hints() -> Self {
        Self { hints: true }
    }

    /// Whether the AI's preferred cell is offered at each prompt.
    pub fn hints(&self) -> bool {
        self.hints
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn next_action(&mut self, rng: &mut SmallRng, game: &GameHistory) -> Action {
        std::println!("{}", ui::render_history(game));
        std::println!("{}", ui::render_board(game.current(), game.winning_line().as_ref()));
        std::println!("{}", ui::render_status(game));

        let hint = if self.hints && !game.status().is_over() {
            ai::choose_cell(game.current(), game.next_mark(), rng)
        } else {
            None
        };
        let stdin = io::stdin();
        loop {
            std::print!("{}", prompt(hint));
            let _ = io::stdout().flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return Action::Quit,
                Ok(_) => {}
            }
            if line.trim().is_empty() {
                if let Some(cell) = hint {
                    return Action::Place(cell);
                }
                continue;
            }
            match parse_command(&line) {
                Some(action) => return action,
                None => std::println!("Invalid command"),
            }
        }
    }

    fn handle_outcome(&mut self, cell: Cell, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Placed { mark, move_number, .. } => {
                std::println!("{} played {} (move #{})", mark, cell, move_number)
            }
            MoveOutcome::Occupied => std::println!("{} is already taken", cell),
            MoveOutcome::GameOver => {
                std::println!("The game is over; jump to an earlier move to keep playing")
            }
            MoveOutcome::OutOfBounds => std::println!("{} is off the board", cell),
        }
    }
}
