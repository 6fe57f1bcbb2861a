#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod player;
mod player_ai;
mod rules;
mod session;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod record;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use ai::{choose_cell, completes_five, score_cell, winning_cell};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
pub use player_ai::*;
pub use rules::{find_five, is_draw, winner, Direction, Line, DIRECTIONS};
pub use session::Session;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
