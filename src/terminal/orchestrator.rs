//! Game orchestration between two seats.

use super::{Console, Seat};
use crate::games::tictactoe::{GameState, GameStatus, Player};
use anyhow::{Result, bail};
use tracing::{debug, info, instrument, warn};

/// Runs one game between two seats.
pub struct Orchestrator<'a> {
    state: GameState,
    player_x: Box<dyn Seat + 'a>,
    player_o: Box<dyn Seat + 'a>,
    show_board: bool,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator for a game. The game is started if it is waiting.
    pub fn new(
        state: GameState,
        player_x: Box<dyn Seat + 'a>,
        player_o: Box<dyn Seat + 'a>,
    ) -> Self {
        Self {
            state: state.start(),
            player_x,
            player_o,
            show_board: true,
        }
    }

    /// Only print the result line, not the board after every move.
    pub fn quiet(mut self) -> Self {
        self.show_board = false;
        self
    }

    /// Plays until the game ends or a seat quits, returning the last state.
    ///
    /// # Errors
    ///
    /// Fails on console I/O errors or when a non-interactive seat proposes
    /// an illegal move.
    #[instrument(skip(self, console), fields(game_id = %self.state.id(), variant = %self.state.variant()))]
    pub fn run(mut self, console: &mut Console<'_>) -> Result<GameState> {
        info!("Starting game orchestration");
        if self.show_board {
            console.say(self.state.board().render())?;
        }

        while self.state.status() == GameStatus::Playing {
            let mover = self.state.active_player();
            let seat = match mover {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            debug!(player = %mover, seat = %seat.name(), "Waiting for move");
            let Some(position) = seat.choose(&self.state, console)? else {
                info!(player = %mover, "Seat left the game");
                console.say(format!("{} left the game.", seat.name()))?;
                return Ok(self.state);
            };

            match self.state.apply_move(position, mover) {
                Ok(next) => {
                    self.state = next;
                    if self.show_board {
                        console.say(format!("{} ({}) plays {}", seat.name(), mover, position))?;
                        console.say(self.state.board().render())?;
                    }
                }
                Err(e) if seat.is_interactive() => {
                    warn!(error = %e, "Rejected move, asking again");
                    console.say(format!("Illegal move: {}", e))?;
                }
                Err(e) => bail!("{} proposed an illegal move: {}", seat.name(), e),
            }
        }

        let summary = match self.state.winner() {
            Some(Player::X) => format!("{} (X) wins!", self.player_x.name()),
            Some(Player::O) => format!("{} (O) wins!", self.player_o.name()),
            None => "It's a draw.".to_string(),
        };
        info!(status = %self.state.status(), winner = ?self.state.winner(), "Game over");
        console.say(summary)?;
        Ok(self.state)
    }
}
