//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use strictly_tictac::{Difficulty, Player, Variant};

/// Strictly Tictac - tic-tac-toe variants in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe variants with a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Board variant (classic, extended4, extended5, connect4, 3d)
        #[arg(long)]
        variant: Option<Variant>,

        /// Computer strength (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Symbol you play against the computer (x or o)
        #[arg(long)]
        human: Option<Player>,

        /// Two humans take turns at the same terminal
        #[arg(long)]
        local: bool,

        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the available board variants
    Variants,

    /// Let the computer play itself on the classic board
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Strength of the X player
        #[arg(long, default_value = "hard")]
        x_difficulty: Difficulty,

        /// Strength of the O player
        #[arg(long, default_value = "easy")]
        o_difficulty: Difficulty,

        /// Seed for reproducible series
        #[arg(long)]
        seed: Option<u64>,
    },
}
