//! Computer opponent for the classic 3x3 board.
//!
//! Three tiers share one contract: given a board, return the index (0-8,
//! row-major) of the cell the computer wants. Larger, layered and gravity
//! boards are rejected with [`OpponentError::UnsupportedBoard`].

mod easy;
mod medium;
mod minimax;

pub use easy::easy_move;
pub use medium::medium_move;
pub use minimax::hard_move;

use super::{Board, Coord, Dimensions, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Takes an immediate win, else blocks an immediate loss, else random.
    Medium,
    /// Full minimax search; never loses.
    #[default]
    Hard,
}

/// Reason the opponent could not produce a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum OpponentError {
    /// Every cell is taken.
    #[display("No move available: the board is full")]
    NoMoveAvailable,

    /// The search only understands the classic 3x3 board.
    #[display("Computer opponent only plays 1x3x3 boards, got {}", _0)]
    UnsupportedBoard(Dimensions),
}

impl std::error::Error for OpponentError {}

/// Classic board flattened into a caller-owned scratch array.
pub(crate) type Grid = [Option<Player>; 9];

/// Winning lines of the classic board, by cell index.
#[rustfmt::skip]
pub(crate) const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

const CLASSIC_DIMS: Dimensions = Dimensions::flat(3, 3);

/// Copies a classic board into a scratch grid.
pub(crate) fn classic_grid(board: &Board) -> Result<Grid, OpponentError> {
    if board.dims() != CLASSIC_DIMS {
        return Err(OpponentError::UnsupportedBoard(board.dims()));
    }
    let mut grid: Grid = [None; 9];
    for (slot, cell) in grid.iter_mut().zip(board.cells()) {
        *slot = cell.player();
    }
    Ok(grid)
}

/// Player holding a complete line, if any.
pub(crate) fn line_winner(grid: &Grid) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| match grid[a] {
        Some(p) if grid[b] == Some(p) && grid[c] == Some(p) => Some(p),
        _ => None,
    })
}

/// Computer player with its own random source.
#[derive(Debug, Clone)]
pub struct Opponent {
    difficulty: Difficulty,
    computer: Player,
    rng: StdRng,
}

impl Opponent {
    /// Creates an opponent playing O, seeded from the operating system.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            computer: Player::O,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an opponent playing O with a reproducible random source.
    #[instrument]
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            computer: Player::O,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sets which symbol the computer plays.
    pub fn playing_as(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
    }

    /// Returns the difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the computer's symbol.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Picks a cell index (0-8) on a classic board.
    ///
    /// # Errors
    ///
    /// [`OpponentError::NoMoveAvailable`] on a full board,
    /// [`OpponentError::UnsupportedBoard`] on anything but 3x3.
    #[instrument(skip(self, board), fields(difficulty = %self.difficulty, computer = %self.computer))]
    pub fn choose(&mut self, board: &Board) -> Result<usize, OpponentError> {
        let index = match self.difficulty {
            Difficulty::Easy => easy_move(board, &mut self.rng),
            Difficulty::Medium => medium_move(board, self.computer, &mut self.rng),
            Difficulty::Hard => hard_move(board, self.computer),
        }?;
        debug!(index, "Computer chose cell");
        Ok(index)
    }

    /// Like [`Opponent::choose`], returned as a board coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`Opponent::choose`].
    pub fn choose_coord(&mut self, board: &Board) -> Result<Coord, OpponentError> {
        let index = self.choose(board)?;
        Coord::from_classic_index(index).ok_or(OpponentError::NoMoveAvailable)
    }
}

/// Picks a move for O at the given difficulty using the thread-local RNG.
///
/// # Errors
///
/// See [`Opponent::choose`].
#[instrument(skip(board))]
pub fn compute_opponent_move(
    board: &Board,
    difficulty: Difficulty,
) -> Result<usize, OpponentError> {
    let mut rng = rand::rng();
    match difficulty {
        Difficulty::Easy => easy_move(board, &mut rng),
        Difficulty::Medium => medium_move(board, Player::O, &mut rng),
        Difficulty::Hard => hard_move(board, Player::O),
    }
}
