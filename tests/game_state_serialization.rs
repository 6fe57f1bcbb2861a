use gomoku::{record, GameHistory, GameState, HistoryError};
use proptest::prelude::*;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("gomoku-{}-{}.bin", name, std::process::id()))
}

proptest! {
    #[test]
    fn game_state_roundtrip(indices in prop::collection::vec(0usize..225, 0..40)) {
        let mut engine = GameHistory::new();
        for i in indices {
            let _ = engine.apply_move(i);
        }
        let state = engine.state();
        let bytes = record::encode(&state).unwrap();
        let decoded: GameState = record::decode(&bytes).unwrap();
        let restored = GameHistory::from_state(&decoded).unwrap();
        assert_eq!(engine, restored);
    }
}

#[test]
fn save_and_load_keep_future_moves() {
    let mut game = GameHistory::new();
    for i in [112, 113, 127, 128, 142] {
        game.apply_move(i);
    }
    game.jump_to(2);
    let path = temp_path("save-load");
    record::save(&game, &path).unwrap();
    let loaded = record::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded.len(), 6);
    assert_eq!(loaded.current_move(), 2);
    assert_eq!(loaded, game);
}

#[test]
fn tampered_record_is_rejected() {
    let state = GameState {
        moves: vec![0, 15, 0],
        current: 3,
    };
    let bytes = record::encode(&state).unwrap();
    let decoded = record::decode(&bytes).unwrap();
    assert_eq!(
        GameHistory::from_state(&decoded).unwrap_err(),
        HistoryError::IllegalMove {
            move_number: 3,
            index: 0
        }
    );
}

#[test]
fn missing_file_is_an_error() {
    let path = temp_path("missing");
    let err = record::load(&path).unwrap_err();
    assert!(err.to_string().contains("reading record"));
}

#[test]
fn trailing_bytes_are_rejected() {
    let mut game = GameHistory::new();
    game.apply_move(112);
    let mut bytes = record::encode(&game.state()).unwrap();
    assert_eq!(record::decode(&bytes).unwrap(), game.state());
    bytes.extend_from_slice(b"junk");
    assert!(record::decode(&bytes).is_err());

    let path = temp_path("trailing");
    std::fs::write(&path, &bytes).unwrap();
    let loaded = record::load(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(loaded.is_err());
}
