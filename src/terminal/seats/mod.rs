//! Seat trait and implementations.

mod computer;
mod human;

pub use computer::ComputerSeat;
pub use human::HumanSeat;

use super::Console;
use crate::games::tictactoe::{Coord, GameState};
use anyhow::Result;

/// Something that occupies one side of the board and picks moves.
pub trait Seat {
    /// Picks the next position for the active player.
    ///
    /// Returns `None` when the seat gives up (end of input or `quit`).
    fn choose(&mut self, state: &GameState, console: &mut Console<'_>) -> Result<Option<Coord>>;

    /// Returns the seat's display name.
    fn name(&self) -> &str;

    /// Whether a rejected move should be retried by asking again.
    fn is_interactive(&self) -> bool;
}
