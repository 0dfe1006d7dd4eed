//! Settings for a terminal game.

use crate::games::tictactoe::{Difficulty, Player, Variant};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for `tictac play`, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Board variant.
    #[serde(default)]
    variant: Variant,

    /// Computer strength on the classic board.
    #[serde(default)]
    difficulty: Difficulty,

    /// Symbol played by the human against the computer.
    #[serde(default = "default_human")]
    human: Player,

    /// Seed for the computer's random source.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_human() -> Player {
    Player::X
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            difficulty: Difficulty::default(),
            human: default_human(),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Creates a configuration from explicit values.
    #[instrument]
    pub fn new(variant: Variant, difficulty: Difficulty, human: Player, seed: Option<u64>) -> Self {
        Self {
            variant,
            difficulty,
            human,
            seed,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            variant = %config.variant,
            difficulty = %config.difficulty,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces any field for which an override is given.
    pub fn with_overrides(
        mut self,
        variant: Option<Variant>,
        difficulty: Option<Difficulty>,
        human: Option<Player>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(human) = human {
            self.human = human;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
