#![cfg(feature = "std")]
//! Binary game records on disk.

use std::fs;
use std::path::Path;

use anyhow::Context;
use bincode::Options;

use crate::game::{GameHistory, GameState};

/// Fixed-width integers, as `bincode::serialize` writes them, and no
/// bytes allowed after the record.
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Encode a record with `bincode`.
pub fn encode(state: &GameState) -> anyhow::Result<Vec<u8>> {
    Ok(options().serialize(state)?)
}

/// Decode a record produced by [`encode`]. Trailing input is an error.
pub fn decode(bytes: &[u8]) -> anyhow::Result<GameState> {
    Ok(options().deserialize(bytes)?)
}

/// Write the whole history of `game` to `path`.
pub fn save(game: &GameHistory, path: &Path) -> anyhow::Result<()> {
    let bytes = encode(&game.state())?;
    fs::write(path, bytes).with_context(|| format!("writing record {}", path.display()))?;
    log::info!("saved {} moves to {}", game.len() - 1, path.display());
    Ok(())
}

/// Load and replay a history saved with [`save`].
pub fn load(path: &Path) -> anyhow::Result<GameHistory> {
    let bytes = fs::read(path).with_context(|| format!("reading record {}", path.display()))?;
    let state = decode(&bytes)?;
    let game = GameHistory::from_state(&state)?;
    Ok(game)
}
