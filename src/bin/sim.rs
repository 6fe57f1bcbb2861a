use gomoku::{AiPlayer, GameStatus, Session};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rngs = [SmallRng::seed_from_u64(seed1), SmallRng::seed_from_u64(seed2)];
    let mut session = Session::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()));
    session.run(&mut rngs, |_| {});

    let game = session.game();
    let winner = match game.status() {
        GameStatus::Winner(mark) => Some(mark.to_string()),
        _ => None,
    };
    let line: Vec<String> = game
        .winning_line()
        .map(|l| l.cells().iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();

    let result = json!({
        "winner": winner,
        "moves": game.current_move(),
        "status": game.status().to_string(),
        "line": line,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
