//! Hard tier: exhaustive minimax over the classic board.
//!
//! Scores are from the human's side: +10 when the human wins, -10 when the
//! computer wins, 0 for a draw. The computer minimizes. No depth weighting,
//! so among equally scored cells the lowest index wins.

use super::{Grid, OpponentError, classic_grid, line_winner};
use crate::games::tictactoe::{Board, Player};
use tracing::{debug, instrument};

const HUMAN_WINS: i32 = 10;
const COMPUTER_WINS: i32 = -10;

/// Picks the optimal cell for `computer`.
///
/// # Errors
///
/// [`OpponentError::NoMoveAvailable`] when the board is full.
#[instrument(skip(board), fields(empty = board.empty_indices().len()))]
pub fn hard_move(board: &Board, computer: Player) -> Result<usize, OpponentError> {
    let mut grid = classic_grid(board)?;
    let human = computer.opponent();

    let mut best: Option<(usize, i32)> = None;
    for idx in 0..grid.len() {
        if grid[idx].is_some() {
            continue;
        }
        grid[idx] = Some(computer);
        let score = minimax(&mut grid, human, computer, true);
        grid[idx] = None;

        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((idx, score));
        }
    }

    let (idx, score) = best.ok_or(OpponentError::NoMoveAvailable)?;
    debug!(idx, score, "Minimax selected cell");
    Ok(idx)
}

/// Value of `grid` with `human` maximizing and `computer` minimizing.
fn minimax(grid: &mut Grid, human: Player, computer: Player, human_to_move: bool) -> i32 {
    match line_winner(grid) {
        Some(p) if p == human => return HUMAN_WINS,
        Some(_) => return COMPUTER_WINS,
        None => {}
    }
    if grid.iter().all(Option::is_some) {
        return 0;
    }

    let mover = if human_to_move { human } else { computer };
    let mut best = if human_to_move { i32::MIN } else { i32::MAX };
    for idx in 0..grid.len() {
        if grid[idx].is_some() {
            continue;
        }
        grid[idx] = Some(mover);
        let score = minimax(grid, human, computer, !human_to_move);
        grid[idx] = None;

        best = if human_to_move {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
