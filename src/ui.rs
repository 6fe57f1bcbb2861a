#![cfg(feature = "std")]
//! Terminal rendering of a game: board grid, history list and status line.

use std::fmt::Write;
use std::string::String;

use crate::{
    board::Snapshot,
    common::Cell,
    config::BOARD_SIZE,
    game::GameHistory,
    rules::Line,
};

/// Draw `snapshot` with column letters and row numbers. Cells of
/// `highlight` are prefixed with `*`.
pub fn render_board(snapshot: &Snapshot, highlight: Option<&Line>) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let Ok(cell) = Cell::new(r, c) else { continue };
            let ch = snapshot.get(cell).map_or('.', |m| m.symbol());
            let marker = if highlight.is_some_and(|l| l.contains(cell)) {
                '*'
            } else {
                ' '
            };
            out.push(marker);
            out.push(ch);
        }
        if r + 1 < BOARD_SIZE {
            out.push('\n');
        }
    }
    out
}

/// Numbered history entries with `>` on the displayed one.
pub fn render_history(game: &GameHistory) -> String {
    let mut out = String::new();
    for (i, description) in game.move_descriptions().iter().enumerate() {
        let marker = if i == game.current_move() { '>' } else { ' ' };
        let _ = writeln!(out, "{} {:>3}. {}", marker, i + 1, description);
    }
    out
}

pub fn render_status(game: &GameHistory) -> String {
    game.status().to_string()
}
