//! Sinks for finished games.

use std::collections::HashMap;

use tracing::{debug, info, instrument, warn};

use super::{GameRecord, PlayerStats, RecordError};

/// Receives records of finished games.
pub trait GameRecorder {
    /// Stores one record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the record cannot be stored.
    fn record(&mut self, record: GameRecord) -> Result<(), RecordError>;
}

/// Recorder that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    records: Vec<GameRecord>,
}

impl MemoryRecorder {
    /// Creates an empty recorder.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in the order they were stored.
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    /// Aggregated results for one player.
    #[instrument(skip(self))]
    pub fn stats_for(&self, player_id: &str) -> PlayerStats {
        PlayerStats::from_records(player_id, &self.records)
    }

    /// Every player ordered by wins, then win rate, then id.
    #[instrument(skip(self), fields(records = self.records.len()))]
    pub fn leaderboard(&self) -> Vec<PlayerStats> {
        let mut by_player: HashMap<&str, PlayerStats> = HashMap::new();
        for record in &self.records {
            for player in record.players() {
                by_player
                    .entry(player.as_str())
                    .or_insert_with(|| PlayerStats::empty(player.as_str()))
                    .add(record);
            }
        }

        let mut board: Vec<PlayerStats> = by_player.into_values().collect();
        board.sort_by(|a, b| {
            b.wins()
                .cmp(a.wins())
                .then_with(|| b.win_rate().total_cmp(&a.win_rate()))
                .then_with(|| a.player_id().cmp(b.player_id()))
        });
        debug!(players = board.len(), "Leaderboard computed");
        board
    }
}

impl GameRecorder for MemoryRecorder {
    #[instrument(skip(self, record), fields(game_id = %record.game_id(), variant = %record.variant()))]
    fn record(&mut self, record: GameRecord) -> Result<(), RecordError> {
        if self.records.iter().any(|r| r.game_id() == record.game_id()) {
            warn!("Game already recorded");
            return Err(RecordError::new(format!(
                "Game '{}' already recorded",
                record.game_id()
            )));
        }
        info!(winner = ?record.winner_id(), moves = record.move_count(), "Game recorded");
        self.records.push(record);
        Ok(())
    }
}
