//! History consistency invariant: history matches occupied cells.

use super::super::GameState;
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell holding
/// that move's mark, and moves are numbered 0, 1, 2, ... in order.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let moves = game.moves();

        if moves.len() != game.board().occupied_count() {
            return false;
        }

        moves.iter().enumerate().all(|(idx, mov)| {
            mov.sequence == idx && game.board().is_owned_by(mov.position, mov.player)
        })
    }

    fn description() -> &'static str {
        "History matches the occupied cells"
    }
}
