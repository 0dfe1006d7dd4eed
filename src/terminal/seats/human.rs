//! Human player reading moves from the console.

use super::Seat;
use crate::games::tictactoe::{Coord, GameState, Variant};
use crate::terminal::Console;
use anyhow::Result;
use tracing::{debug, instrument};

/// Human player typing coordinates.
///
/// Accepts `row,col` or `layer,row,col` (zero-based), a classic cell label
/// such as `center`, a keypad digit `1`-`9` on the classic board, or a
/// one-based column number on gravity boards.
pub struct HumanSeat {
    name: String,
}

impl HumanSeat {
    /// Creates a new human seat.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn interpret(state: &GameState, input: &str) -> Interpreted {
        let config = state.variant().config();
        if let Ok(number) = input.parse::<i32>() {
            if config.gravity {
                return match state.drop_position(number - 1) {
                    Some(coord) => Interpreted::Move(coord),
                    None => Interpreted::Rejected("That column is full or does not exist"),
                };
            }
            if state.variant() == Variant::Classic {
                if !(1..=9).contains(&number) {
                    return Interpreted::Rejected("Cells are numbered 1 to 9");
                }
                return Coord::from_classic_index((number - 1) as usize)
                    .map_or(Interpreted::Unreadable, Interpreted::Move);
            }
        }
        Coord::parse(input).map_or(Interpreted::Unreadable, Interpreted::Move)
    }
}

enum Interpreted {
    Move(Coord),
    Rejected(&'static str),
    Unreadable,
}

impl Seat for HumanSeat {
    #[instrument(skip(self, state, console), fields(seat = %self.name, player = %state.active_player()))]
    fn choose(&mut self, state: &GameState, console: &mut Console<'_>) -> Result<Option<Coord>> {
        loop {
            console.prompt(format!("{} ({}) > ", self.name, state.active_player()))?;
            let Some(line) = console.read_line()? else {
                debug!("Input closed");
                return Ok(None);
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match Self::interpret(state, input) {
                Interpreted::Move(coord) => {
                    debug!(%coord, "Human chose position");
                    return Ok(Some(coord));
                }
                Interpreted::Rejected(reason) => console.say(reason)?,
                Interpreted::Unreadable => console.say(format!(
                    "Could not read '{}'. Try row,col (for example 1,2) or quit.",
                    input
                ))?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
