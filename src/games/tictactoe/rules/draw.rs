//! Draw detection logic.

use super::super::Board;
use super::win::find_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(dims = %board.dims()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is full with no winning run for either player.
#[instrument(skip(board), fields(dims = %board.dims()))]
pub fn is_drawn(board: &Board, win_length: usize, allow_diagonals: bool, allow_3d: bool) -> bool {
    is_full(board) && find_winner(board, win_length, allow_diagonals, allow_3d).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Coord, Dimensions, Player};

    fn classic(rows: [&str; 3]) -> Board {
        let mut board = Board::new(Dimensions::flat(3, 3));
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Occupied(Player::X),
                    'O' => Cell::Occupied(Player::O),
                    _ => Cell::Empty,
                };
                board.set(Coord::new(r as i32, c as i32), cell).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(Dimensions::flat(3, 3))));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&classic(["X..", "...", "..."])));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(&classic(["XXX", "XXX", "XXX"])));
    }

    #[test]
    fn test_draw_detection() {
        assert!(is_drawn(&classic(["XOX", "OXX", "OXO"]), 3, true, false));
    }

    #[test]
    fn test_not_draw_if_winner() {
        assert!(!is_drawn(&classic(["XXX", "OOX", "OXO"]), 3, true, false));
    }
}
