//! Medium tier: one-move lookahead.
//!
//! Only immediate wins and immediate blocks are seen; forks and longer
//! threats are not.

use super::{Grid, LINES, OpponentError, classic_grid, easy_move};
use crate::games::tictactoe::{Board, Player};
use rand::Rng;
use tracing::debug;

/// Lowest empty cell that would complete a line for `player`.
fn completing_cell(grid: &Grid, player: Player) -> Option<usize> {
    let completes = |idx: usize, line: &[usize; 3]| {
        line.iter()
            .filter(|&&cell| cell != idx)
            .all(|&cell| grid[cell] == Some(player))
    };
    (0..grid.len())
        .filter(|&idx| grid[idx].is_none())
        .find(|&idx| {
            LINES
                .iter()
                .filter(|line| line.contains(&idx))
                .any(|line| completes(idx, line))
        })
}

/// Wins if possible, else blocks the opponent's win, else plays randomly.
///
/// # Errors
///
/// [`OpponentError::NoMoveAvailable`] when the board is full.
pub fn medium_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Player,
    rng: &mut R,
) -> Result<usize, OpponentError> {
    let grid = classic_grid(board)?;

    if let Some(idx) = completing_cell(&grid, computer) {
        debug!(idx, "Taking immediate win");
        return Ok(idx);
    }
    if let Some(idx) = completing_cell(&grid, computer.opponent()) {
        debug!(idx, "Blocking immediate loss");
        return Ok(idx);
    }
    easy_move(board, rng)
}
