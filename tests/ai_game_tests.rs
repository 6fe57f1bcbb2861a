use gomoku::{
    choose_cell, winning_cell, AiPlayer, Cell, GameHistory, GameStatus, Mark, Session, Snapshot,
};
use rand::{rngs::SmallRng, SeedableRng};

fn snapshot(marks: &[(&str, Mark)]) -> Snapshot {
    marks.iter().fold(Snapshot::empty(), |s, &(c, m)| {
        s.with_mark(c.parse::<Cell>().unwrap(), m).unwrap()
    })
}

#[test]
fn ai_blocks_open_four() {
    let snap = snapshot(&[
        ("D4", Mark::X),
        ("E4", Mark::X),
        ("F4", Mark::X),
        ("G4", Mark::X),
        ("C3", Mark::O),
        ("K10", Mark::O),
        ("L11", Mark::O),
    ]);
    // C4 and H4 both block; the scan finds C4 first
    assert_eq!(winning_cell(&snap, Mark::X), Some("C4".parse().unwrap()));
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(choose_cell(&snap, Mark::O, &mut rng), Some("C4".parse().unwrap()));
}

#[test]
fn ai_returns_none_on_full_board() {
    let cells: [Option<Mark>; 225] = core::array::from_fn(|i| {
        if ((i % 15 + 2 * (i / 15)) / 2) % 2 == 0 {
            Some(Mark::X)
        } else {
            Some(Mark::O)
        }
    });
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(choose_cell(&Snapshot::from_cells(&cells), Mark::O, &mut rng), None);
}

fn ai_game(seed1: u64, seed2: u64) -> GameHistory {
    let mut rngs = [SmallRng::seed_from_u64(seed1), SmallRng::seed_from_u64(seed2)];
    let mut session = Session::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()));
    session.run(&mut rngs, |_| {});
    session.into_game()
}

#[test]
fn ai_vs_ai_finishes() {
    for seed in 0..4 {
        let game = ai_game(seed, seed + 100);
        assert!(game.status().is_over(), "seed {} ended at {}", seed, game.status());
        assert_eq!(game.current_move(), game.len() - 1);
        assert_eq!(game.moves().len(), game.len() - 1);
        if let GameStatus::Winner(mark) = game.status() {
            // the winner made the last move
            assert_eq!(mark, Mark::for_move(game.current_move() - 1));
        }
    }
}

#[test]
fn same_seeds_same_game() {
    assert_eq!(ai_game(42, 43), ai_game(42, 43));
}
