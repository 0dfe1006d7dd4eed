//! Status consistency invariant: status, winner and board agree.

use super::super::{GameState, GameStatus};
use super::Invariant;

/// Invariant: The status matches the winner and the board.
///
/// - `finished` has a winner
/// - `draw` has a full board and no winner
/// - `waiting` and `playing` have no winner, and `waiting` has no moves
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        match game.status() {
            GameStatus::Finished => game.winner().is_some(),
            GameStatus::Draw => game.winner().is_none() && game.board().is_full(),
            GameStatus::Playing => game.winner().is_none(),
            GameStatus::Waiting => game.winner().is_none() && game.moves().is_empty(),
        }
    }

    fn description() -> &'static str {
        "Status agrees with winner and board"
    }
}
