#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use gomoku::{
    describe_move, init_logging, record, ui, AiPlayer, CliPlayer, GameHistory, Player, Session,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Two people take turns at the same terminal.
    Hotseat {
        #[arg(long, help = "Write the game record to this file when the game ends")]
        save: Option<PathBuf>,
        #[arg(long, help = "Resume from a saved game record")]
        resume: Option<PathBuf>,
    },
    /// Play against the computer.
    VsAi {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Let the computer play X and move first")]
        ai_first: bool,
        #[arg(long, help = "Suggest a move at each prompt")]
        hints: bool,
        #[arg(long, help = "Write the game record to this file when the game ends")]
        save: Option<PathBuf>,
    },
    /// Print every position of a saved game.
    Replay { path: PathBuf },
}

#[cfg(feature = "std")]
fn seeded(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn finish(session: Session, save: Option<PathBuf>) -> anyhow::Result<()> {
    let game = session.into_game();
    println!("{}", ui::render_board(game.current(), game.winning_line().as_ref()));
    println!("{}", ui::render_status(&game));
    if let Some(path) = save {
        record::save(&game, &path)?;
        println!("Game saved to {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Hotseat { save, resume } => {
            let game = match resume {
                Some(path) => record::load(&path)?,
                None => GameHistory::new(),
            };
            let mut session = Session::with_game(
                game,
                Box::new(CliPlayer::new()),
                Box::new(CliPlayer::new()),
            );
            let mut rngs = [seeded(None, 0), seeded(None, 1)];
            session.run(&mut rngs, |_| {});
            finish(session, save)?;
        }
        Commands::VsAi {
            seed,
            ai_first,
            hints,
            save,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let human: Box<dyn Player> = if hints {
                Box::new(CliPlayer::with_hints())
            } else {
                Box::new(CliPlayer::new())
            };
            let computer: Box<dyn Player> = Box::new(AiPlayer::new());
            let mut session = if ai_first {
                Session::new(computer, human)
            } else {
                Session::new(human, computer)
            };
            let mut rngs = [seeded(seed, 0), seeded(seed, 1)];
            session.run(&mut rngs, |_| {});
            finish(session, save)?;
        }
        Commands::Replay { path } => {
            let mut game = record::load(&path)?;
            for move_number in 0..game.len() {
                game.jump_to(move_number);
                println!("\n{}", describe_move(move_number));
                println!(
                    "{}",
                    ui::render_board(game.current(), game.winning_line().as_ref())
                );
                println!("{}", ui::render_status(&game));
            }
        }
    }
    Ok(())
}
