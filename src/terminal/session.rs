//! Entry points for the `play` and `selfplay` commands.

use super::{ComputerSeat, Console, HumanSeat, Orchestrator, Seat};
use crate::config::PlayConfig;
use crate::games::tictactoe::{Difficulty, GameMode, GameState, Opponent, Player, Variant};
use crate::record::{GameRecord, GameRecorder, MemoryRecorder};
use anyhow::{Context, Result, bail};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

fn opponent(difficulty: Difficulty, seed: Option<u64>) -> Opponent {
    match seed {
        Some(seed) => Opponent::seeded(difficulty, seed),
        None => Opponent::new(difficulty),
    }
}

/// Plays one interactive game.
///
/// With `local` both seats are human (hot-seat); otherwise the human plays
/// `config.human()` against the computer, which requires the classic board.
///
/// # Errors
///
/// Fails when the computer is asked to play a non-classic variant, or on
/// console I/O errors.
#[instrument(skip(config, console), fields(variant = %config.variant(), difficulty = %config.difficulty()))]
pub fn run_play(config: &PlayConfig, local: bool, console: &mut Console<'_>) -> Result<GameState> {
    let variant = *config.variant();
    let variant_config = variant.config();
    console.say(format!("{}: {}", variant_config.name, variant_config.description))?;
    console.say(format!(
        "Get {} in a row. Type row,col (zero-based) or quit.",
        variant_config.win_length
    ))?;

    let state = GameState::new(variant, GameMode::Offline);
    let (player_x, player_o): (Box<dyn Seat>, Box<dyn Seat>) = if local {
        (
            Box::new(HumanSeat::new("Player X")),
            Box::new(HumanSeat::new("Player O")),
        )
    } else {
        if variant != Variant::Classic {
            bail!(
                "The computer only plays the classic board; use --local for {}",
                variant
            );
        }
        let human = *config.human();
        let computer = ComputerSeat::new(
            format!("Computer ({})", config.difficulty()),
            opponent(*config.difficulty(), *config.seed()).playing_as(human.opponent()),
        );
        let you = HumanSeat::new("You");
        match human {
            Player::X => (Box::new(you), Box::new(computer)),
            Player::O => (Box::new(computer), Box::new(you)),
        }
    };

    Orchestrator::new(state, player_x, player_o).run(console)
}

/// Plays computer against computer on the classic board and records every game.
///
/// A seed makes the whole series reproducible.
///
/// # Errors
///
/// Fails on console I/O errors or if a record cannot be stored.
#[instrument(skip(console))]
pub fn run_selfplay(
    games: u32,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    seed: Option<u64>,
    console: &mut Console<'_>,
) -> Result<MemoryRecorder> {
    let x_name = format!("{} X", x_difficulty);
    let o_name = format!("{} O", o_difficulty);
    let mut recorder = MemoryRecorder::new();

    for round in 0..games {
        let round_seed = |offset: u64| seed.map(|s| s.wrapping_add(u64::from(round) * 2 + offset));
        let x = ComputerSeat::new(
            x_name.clone(),
            opponent(x_difficulty, round_seed(0)).playing_as(Player::X),
        );
        let o = ComputerSeat::new(
            o_name.clone(),
            opponent(o_difficulty, round_seed(1)).playing_as(Player::O),
        );
        let state = GameState::new(Variant::Classic, GameMode::Offline)
            .with_players(x_name.clone(), o_name.clone());

        console.prompt(format!("Game {}: ", round + 1))?;
        let finished = Orchestrator::new(state, Box::new(x), Box::new(o))
            .quiet()
            .run(console)?;
        let record = GameRecord::from_state(&finished)
            .context("Self-play game ended without a result")?;
        recorder.record(record)?;
    }

    info!(games, "Self-play finished");
    console.say("")?;
    console.say("Player        Games  Wins  Losses  Draws  Win rate")?;
    for stats in recorder.leaderboard() {
        console.say(format!(
            "{:<12} {:>6} {:>5} {:>7} {:>6} {:>8.1}%",
            stats.player_id(),
            stats.games(),
            stats.wins(),
            stats.losses(),
            stats.draws(),
            stats.win_rate()
        ))?;
    }
    Ok(recorder)
}

/// Prints the variant table.
///
/// # Errors
///
/// Fails on console I/O errors.
pub fn list_variants(console: &mut Console<'_>) -> Result<()> {
    for variant in Variant::iter() {
        let config = variant.config();
        let mut rules = vec![format!("{} in a row", config.win_length)];
        if config.gravity {
            rules.push("gravity".to_string());
        }
        if config.allow_3d {
            rules.push("3D lines".to_string());
        }
        console.say(format!(
            "{:<10} {:<22} {:>7}  {}",
            variant.to_string(),
            config.name,
            config.dims().to_string(),
            rules.join(", ")
        ))?;
    }
    Ok(())
}
