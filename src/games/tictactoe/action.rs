//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Coord, GameStatus, Player};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A recorded move: a player placing their mark at a position.
///
/// Moves are first-class domain events that can be:
/// - Serialized for replay
/// - Logged for debugging
/// - Replayed to rebuild a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Coord,
    /// Zero-based position of this move in the game's history.
    pub sequence: usize,
    /// When the move was accepted.
    pub timestamp: DateTime<Utc>,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Coord, sequence: usize, timestamp: DateTime<Utc>) -> Self {
        Self {
            player,
            position,
            sequence,
            timestamp,
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Coord {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.sequence + 1, self.player, self.position)
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Player),

    /// The game is not accepting moves.
    #[display("Game is not active (status: {})", _0)]
    GameNotActive(GameStatus),

    /// The position is outside the board on some axis.
    #[display("Position {} is out of bounds", _0)]
    OutOfBounds(Coord),

    /// The cell at the position is already occupied.
    #[display("Position {} is already occupied", _0)]
    CellOccupied(Coord),

    /// Gravity variants only accept the lowest empty cell of a column.
    #[display("Position {} is not the lowest empty cell of its column", _0)]
    MustDropToLowestEmpty(Coord),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
