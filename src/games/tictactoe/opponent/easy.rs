//! Easy tier: a uniformly random empty cell.

use super::{OpponentError, classic_grid};
use crate::games::tictactoe::Board;
use rand::Rng;

/// Picks an empty cell uniformly at random.
///
/// # Errors
///
/// [`OpponentError::NoMoveAvailable`] when the board is full.
pub fn easy_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, OpponentError> {
    let grid = classic_grid(board)?;
    let empty: Vec<usize> = (0..grid.len()).filter(|&idx| grid[idx].is_none()).collect();
    if empty.is_empty() {
        return Err(OpponentError::NoMoveAvailable);
    }
    Ok(empty[rng.random_range(0..empty.len())])
}
