//! Records of finished games and player statistics.

mod error;
mod models;
mod recorder;

pub use error::RecordError;
pub use models::{DEFAULT_PLAYER_O, DEFAULT_PLAYER_X, GameOutcome, GameRecord, PlayerStats};
pub use recorder::{GameRecorder, MemoryRecorder};
