//! Seat driven by the computer opponent.

use super::Seat;
use crate::games::tictactoe::{Coord, GameState, Opponent};
use crate::terminal::Console;
use anyhow::Result;
use tracing::{debug, instrument};

/// Computer player wrapping an [`Opponent`].
pub struct ComputerSeat {
    name: String,
    opponent: Opponent,
}

impl ComputerSeat {
    /// Creates a computer seat.
    pub fn new(name: impl Into<String>, opponent: Opponent) -> Self {
        Self {
            name: name.into(),
            opponent,
        }
    }
}

impl Seat for ComputerSeat {
    #[instrument(skip(self, state, _console), fields(seat = %self.name))]
    fn choose(&mut self, state: &GameState, _console: &mut Console<'_>) -> Result<Option<Coord>> {
        let coord = self.opponent.choose_coord(state.board())?;
        debug!(%coord, "Computer chose position");
        Ok(Some(coord))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
