//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::state::GameState;
use super::{Coord, GameStatus, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// A proposed placement that has not been accepted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The player asking to move.
    pub player: Player,
    /// Where they want to place their mark.
    pub position: Coord,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(player: Player, position: Coord) -> Self {
        Self { player, position }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects placements by anyone but the active player.
    pub fn check(placement: &Placement, game: &GameState) -> Result<(), MoveError> {
        if placement.player != game.active_player() {
            Err(MoveError::WrongTurn(placement.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The game must be accepting moves.
pub struct GameActive;

impl GameActive {
    /// Rejects placements unless the game is playing.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match game.status() {
            GameStatus::Playing => Ok(()),
            other => Err(MoveError::GameNotActive(other)),
        }
    }
}

/// Precondition: The position lies inside the variant's bounds on every axis.
pub struct WithinBounds;

impl WithinBounds {
    /// Rejects positions off the board, including the layer axis.
    ///
    /// Bounds come from the variant configuration, not from the board the
    /// state happens to carry.
    pub fn check(placement: &Placement, game: &GameState) -> Result<(), MoveError> {
        if game.variant().config().dims().contains(placement.position) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(placement.position))
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects positions that already hold a mark.
    pub fn check(placement: &Placement, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty_at(placement.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(placement.position))
        }
    }
}

/// Precondition: On gravity variants the mark lands in the lowest empty cell
/// of its column.
pub struct DropsToLowest;

impl DropsToLowest {
    /// Rejects gravity placements above the column's landing cell.
    pub fn check(placement: &Placement, game: &GameState) -> Result<(), MoveError> {
        if !game.variant().config().gravity {
            return Ok(());
        }
        let Coord { layer, row, col } = placement.position;
        match game.board().lowest_empty_row(layer, col) {
            Some(lowest) if lowest == row => Ok(()),
            _ => Err(MoveError::MustDropToLowestEmpty(placement.position)),
        }
    }
}

/// Composite precondition: all placement rules, in order, stopping at the
/// first failure.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a placement.
    #[instrument(skip(game), fields(game_id = %game.id()))]
    pub fn check(placement: &Placement, game: &GameState) -> Result<(), MoveError> {
        PlayersTurn::check(placement, game)?;
        GameActive::check(game)?;
        WithinBounds::check(placement, game)?;
        CellIsEmpty::check(placement, game)?;
        DropsToLowest::check(placement, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Must be player's turn
/// - Game must be playing
/// - Position on the board
/// - Cell must be empty
/// - Gravity drop respected
///
/// Postconditions:
/// - History grew by exactly one move
/// - All game invariants still hold
pub struct MoveContract;

impl Contract<GameState, Placement> for MoveContract {
    fn pre(game: &GameState, action: &Placement) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.moves().len() != before.moves().len() + 1 {
            warn!(
                before = before.moves().len(),
                after = after.moves().len(),
                "History did not grow by one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant check failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
