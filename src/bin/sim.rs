//! Replays two move scripts against each other and prints the result as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use battleship_duel::{init_logging, play, GameEngine, ScriptedPlayer, Seats, DEFAULT_PLAYER_NAMES};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};

#[derive(Parser)]
#[command(about = "Play a scripted game and print its summary")]
struct Args {
    /// Moves of the first player, one per line.
    first_script: PathBuf,
    /// Moves of the second player, one per line.
    second_script: PathBuf,
    /// Seed for blank-line random placement.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn load(path: &PathBuf) -> anyhow::Result<ScriptedPlayer> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read script {}", path.display()))?;
    Ok(ScriptedPlayer::from_script(&text))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut p1 = load(&args.first_script)?;
    let mut p2 = load(&args.second_script)?;
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut engine = GameEngine::new(DEFAULT_PLAYER_NAMES[0], DEFAULT_PLAYER_NAMES[1]);

    let summary = play(&mut engine, &mut Seats::Separate(&mut p1, &mut p2), &mut rng)?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
