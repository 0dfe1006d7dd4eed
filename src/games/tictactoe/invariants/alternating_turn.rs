//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern and the active player
/// must be the next one in that pattern. Once the game is over the active
/// player stays on whoever made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let moves = game.moves();

        // First move must be X
        if moves.first().is_some_and(|m| m.player != Player::X) {
            return false;
        }

        // Check alternation
        if moves.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected = match (game.status().is_terminal(), moves.last()) {
            (true, Some(last)) => last.player,
            _ if moves.len() % 2 == 0 => Player::X,
            _ => Player::O,
        };

        game.active_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Coord, GameMode, Variant, create_game_state};

    #[test]
    fn test_empty_game_holds() {
        let game = create_game_state(Variant::Classic, GameMode::Offline).start();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_single_move_holds() {
        let game = create_game_state(Variant::Classic, GameMode::Offline).start();
        let game = game.apply_move(Coord::new(1, 1), Player::X).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.active_player(), Player::O);
    }

    #[test]
    fn test_finished_game_keeps_winner_active() {
        let mut game = create_game_state(Variant::Classic, GameMode::Offline).start();
        for (coord, player) in [
            (Coord::new(0, 0), Player::X),
            (Coord::new(1, 0), Player::O),
            (Coord::new(0, 1), Player::X),
            (Coord::new(1, 1), Player::O),
            (Coord::new(0, 2), Player::X),
        ] {
            game = game.apply_move(coord, player).unwrap();
        }
        assert!(game.is_terminal());
        assert_eq!(game.active_player(), Player::X);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let game = create_game_state(Variant::Classic, GameMode::Offline).start();
        let mut game = game.apply_move(Coord::new(1, 1), Player::X).unwrap();
        // Force the turn back to X
        game.active_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
