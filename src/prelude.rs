//! Commonly used types and utilities for ease of import.

pub use crate::{
    winner, AiPlayer, Cell, GameHistory, GameStatus, Mark, MoveOutcome, Player, Session, Snapshot,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, parse_command, CliPlayer};
