//! Strictly Tictac - terminal front end
//!
//! Plays every variant hot-seat, the classic board against the computer,
//! and computer-vs-computer series.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use strictly_tictac::{Console, GameRecord, PlayConfig, list_variants, run_play, run_selfplay};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    let mut console = Console::new(&mut input, &mut output);

    match cli.command {
        Command::Play {
            variant,
            difficulty,
            human,
            local,
            config,
            seed,
        } => {
            let config = load_play_config(config.as_deref())?
                .with_overrides(variant, difficulty, human, seed);
            play(&config, local, &mut console)
        }
        Command::Variants => list_variants(&mut console),
        Command::Selfplay {
            games,
            x_difficulty,
            o_difficulty,
            seed,
        } => run_selfplay(games, x_difficulty, o_difficulty, seed, &mut console).map(|_| ()),
    }?;

    output.flush()?;
    Ok(())
}

#[instrument(skip(config_path))]
fn load_play_config(config_path: Option<&std::path::Path>) -> Result<PlayConfig> {
    match config_path {
        Some(path) => PlayConfig::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => {
            debug!("No settings file given, using defaults");
            Ok(PlayConfig::default())
        }
    }
}

/// Run one interactive game and log its record.
#[instrument(skip(config, console))]
fn play(config: &PlayConfig, local: bool, console: &mut Console<'_>) -> Result<()> {
    let state = run_play(config, local, console)?;
    if let Some(record) = GameRecord::from_state(&state) {
        info!(record = %record.to_json()?, "Game recorded");
    }
    Ok(())
}
