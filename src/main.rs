use std::io;

use battleship_duel::{init_logging, play, CliPlayer, GameEngine, Seats, DEFAULT_PLAYER_NAMES};
use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Two-player Battleship on one terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the player who places and shoots first.
    #[arg(long, default_value = DEFAULT_PLAYER_NAMES[0])]
    first: String,
    /// Name of the second player.
    #[arg(long, default_value = DEFAULT_PLAYER_NAMES[1])]
    second: String,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Do not wait for Enter when the move passes to the other player.
    #[arg(long)]
    no_pause: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => {
            info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut player = CliPlayer::new(stdin.lock(), stdout.lock(), !cli.no_pause);
    let mut engine = GameEngine::new(cli.first, cli.second);

    let summary = play(&mut engine, &mut Seats::Shared(&mut player), &mut rng)?;
    info!(
        "game over: {} won after {} shots",
        summary.winner_name.as_deref().unwrap_or("nobody"),
        summary
            .winner
            .map_or(0, |w| summary.players[w].shots_fired)
    );
    Ok(())
}
