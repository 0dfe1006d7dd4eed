//! Completed-game records and per-player aggregates.

use crate::games::tictactoe::{GameState, Player, Variant};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::instrument;

use super::RecordError;

/// Default identity for the X seat of an offline game.
pub const DEFAULT_PLAYER_X: &str = "Player X";
/// Default identity for the O seat of an offline game.
pub const DEFAULT_PLAYER_O: &str = "Player O";

/// Summary of a finished game handed to persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    game_id: String,
    variant: Variant,
    /// X seat first, then O.
    players: [String; 2],
    winner_id: Option<String>,
    move_count: usize,
    duration_ms: i64,
    timestamp: DateTime<Utc>,
}

impl GameRecord {
    /// Builds a record from a finished or drawn game.
    ///
    /// Returns `None` while the game is still waiting or playing.
    #[instrument(skip(state), fields(game_id = %state.id(), status = %state.status()))]
    pub fn from_state(state: &GameState) -> Option<Self> {
        if !state.is_terminal() {
            return None;
        }
        let players = [
            state.player_id(Player::X).unwrap_or(DEFAULT_PLAYER_X).to_string(),
            state.player_id(Player::O).unwrap_or(DEFAULT_PLAYER_O).to_string(),
        ];
        let winner_id = state.winner().map(|winner| match winner {
            Player::X => players[0].clone(),
            Player::O => players[1].clone(),
        });
        let duration_ms = (state.updated_at() - state.created_at()).num_milliseconds();

        Some(Self::new(
            state.id().to_string(),
            state.variant(),
            players,
            winner_id,
            state.moves().len(),
            duration_ms,
            state.updated_at(),
        ))
    }

    /// Outcome from `player_id`'s side, or `None` if they did not play.
    pub fn outcome_for(&self, player_id: &str) -> Option<GameOutcome> {
        if !self.players.iter().any(|p| p == player_id) {
            return None;
        }
        Some(match &self.winner_id {
            None => GameOutcome::Draw,
            Some(winner) if winner == player_id => GameOutcome::Win,
            Some(_) => GameOutcome::Loss,
        })
    }

    /// Serializes the record to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if serialization fails.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Game outcome from one player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameOutcome {
    /// The player won.
    Win,
    /// The player lost.
    Loss,
    /// Nobody won.
    Draw,
}

/// Aggregated results for one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerStats {
    player_id: String,
    games: u32,
    wins: u32,
    losses: u32,
    draws: u32,
    per_variant: HashMap<Variant, u32>,
}

impl PlayerStats {
    /// Empty statistics for a player.
    pub fn empty(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            games: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            per_variant: HashMap::new(),
        }
    }

    /// Aggregates every record `player_id` took part in.
    #[instrument(skip(records), fields(count = records.len()))]
    pub fn from_records(player_id: &str, records: &[GameRecord]) -> Self {
        records
            .iter()
            .fold(Self::empty(player_id), |mut stats, record| {
                stats.add(record);
                stats
            })
    }

    /// Folds one record in. Records the player did not take part in are ignored.
    pub fn add(&mut self, record: &GameRecord) {
        let Some(outcome) = record.outcome_for(&self.player_id) else {
            return;
        };
        self.games += 1;
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        *self.per_variant.entry(record.variant).or_insert(0) += 1;
    }

    /// Games played on one variant.
    pub fn games_on(&self, variant: Variant) -> u32 {
        self.per_variant.get(&variant).copied().unwrap_or(0)
    }

    /// Calculates win rate as a percentage (0.0–100.0).
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            (self.wins as f64 / self.games as f64) * 100.0
        }
    }
}
