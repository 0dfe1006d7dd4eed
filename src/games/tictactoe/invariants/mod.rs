//! First-class invariants for game states.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All game state invariants as a composable set.
pub type GameInvariants = (
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    StatusConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Coord, GameMode, Player, Variant, create_game_state};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = create_game_state(Variant::Classic, GameMode::Offline).start();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = create_game_state(Variant::Extended4, GameMode::Offline).start();
        let game = game.apply_move(Coord::new(0, 0), Player::X).unwrap();
        let game = game.apply_move(Coord::new(1, 1), Player::O).unwrap();
        let game = game.apply_move(Coord::new(0, 3), Player::X).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let game = create_game_state(Variant::Classic, GameMode::Offline).start();
        let mut game = game.apply_move(Coord::new(1, 1), Player::X).unwrap();

        // Corrupt the board
        game.board
            .set(Coord::new(0, 0), Cell::Occupied(Player::O))
            .unwrap();

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = create_game_state(Variant::Classic, GameMode::Offline).start();

        type TwoInvariants = (HistoryConsistentInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
