//! Life Game - terminal front end
//!
//! Rolls the die until the player reaches the maximum age (or a turn limit),
//! printing every log entry and the final status.

use clap::Parser;
use life_game_core::config::{bundled_catalog, load_catalog_file, load_rules_file, GameRules};
use life_game_core::simulator::render::{render_log_entry, render_status};
use life_game_core::{LifeGame, RollDriver, TurnEngine};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "life_game")]
#[command(about = "Roll the die, grow up, see what happens")]
struct Args {
    /// Event catalog JSON (defaults to the bundled catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Game rules TOML
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Seed for reproducible dice
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many turns even if the game is not over
    #[arg(long)]
    turns: Option<u32>,

    /// Print log entries as JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Skip the pause before each roll
    #[arg(long)]
    no_delay: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("life_game_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match args.catalog {
        Some(ref path) => load_catalog_file(path)?,
        None => bundled_catalog().clone(),
    };
    let rules = match args.rules {
        Some(ref path) => load_rules_file(path)?,
        None => GameRules::default(),
    };
    tracing::info!(
        events = catalog.len(),
        max_age = rules.max_age_years,
        die_faces = rules.die_faces,
        "starting life game"
    );

    let engine = Arc::new(TurnEngine::new(catalog, rules)?);
    let game = match args.seed {
        Some(seed) => LifeGame::with_seed(engine, seed),
        None => LifeGame::new(engine),
    };
    let mut driver = RollDriver::new(game);
    if args.no_delay {
        driver = driver.with_delay(Duration::ZERO);
    }

    let mut played = 0u32;
    while driver.can_roll() && args.turns.map_or(true, |limit| played < limit) {
        let entry = driver.roll().await?;
        played += 1;

        if args.json {
            println!("{}", serde_json::to_string(&entry)?);
        } else {
            println!("{}\n", render_log_entry(&entry));
        }
    }

    if !args.json {
        let game = driver.lock();
        println!("{}", render_status(game.state(), game.engine().rules()));
    }

    Ok(())
}
