//! Core domain types for tic-tac-toe boards.

use super::action::MoveError;
use super::coord::Coord;
use super::variant::VariantConfig;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    #[serde(alias = "x")]
    X,
    /// Player O (goes second).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on a board.
///
/// On the wire a cell is `null` or the occupying player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Player>", into = "Option<Player>")]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

impl From<Option<Player>> for Cell {
    fn from(value: Option<Player>) -> Self {
        value.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Cell> for Option<Player> {
    fn from(cell: Cell) -> Self {
        cell.player()
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// Extent of a board along each axis.
///
/// Two-dimensional boards have a single layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{}x{}x{}", layers, rows, cols)]
pub struct Dimensions {
    /// Number of layers (1 for flat boards).
    pub layers: usize,
    /// Number of rows per layer.
    pub rows: usize,
    /// Number of columns per row.
    pub cols: usize,
}

impl Dimensions {
    /// Creates dimensions for a flat board.
    pub const fn flat(rows: usize, cols: usize) -> Self {
        Self {
            layers: 1,
            rows,
            cols,
        }
    }

    /// Creates dimensions for a layered board.
    pub const fn layered(layers: usize, rows: usize, cols: usize) -> Self {
        Self { layers, rows, cols }
    }

    /// Total number of cells.
    pub const fn cell_count(&self) -> usize {
        self.layers * self.rows * self.cols
    }

    /// Total number of cells, or `None` if the product overflows `usize`.
    pub fn checked_cell_count(&self) -> Option<usize> {
        self.layers.checked_mul(self.rows)?.checked_mul(self.cols)
    }

    /// Checks whether the coordinate lies inside these dimensions on every axis.
    pub fn contains(&self, coord: Coord) -> bool {
        let axis = |value: i32, extent: usize| usize::try_from(value).is_ok_and(|v| v < extent);
        axis(coord.layer, self.layers) && axis(coord.row, self.rows) && axis(coord.col, self.cols)
    }
}

/// The shape a board arrives in over the wire, checked before use.
#[derive(Deserialize)]
struct BoardRepr {
    dims: Dimensions,
    cells: Vec<Cell>,
}

/// A board whose cell list disagrees with its dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardShapeError {
    /// The cell list has the wrong length.
    #[display("board of {} holds {} cells, expected {}", dims, actual, expected)]
    CellCount {
        /// Declared dimensions.
        dims: Dimensions,
        /// Cells actually supplied.
        actual: usize,
        /// Cells the dimensions call for.
        expected: usize,
    },
    /// The declared dimensions multiply past `usize::MAX`.
    #[display("board of {} has too many cells to address", _0)]
    TooLarge(Dimensions),
}

impl std::error::Error for BoardShapeError {}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardShapeError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let expected = repr
            .dims
            .checked_cell_count()
            .ok_or(BoardShapeError::TooLarge(repr.dims))?;
        if repr.cells.len() != expected {
            return Err(BoardShapeError::CellCount {
                dims: repr.dims,
                actual: repr.cells.len(),
                expected,
            });
        }
        Ok(Self {
            dims: repr.dims,
            cells: repr.cells,
        })
    }
}

/// Game board of fixed dimensions.
///
/// Cells are stored layer by layer, each layer in row-major order. Row 0
/// is the top row; gravity variants fill from row `rows - 1` upward.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    #[instrument]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()],
        }
    }

    /// Creates an empty board sized for a variant.
    pub fn for_config(config: &VariantConfig) -> Self {
        Self::new(config.dims())
    }

    /// Returns the board dimensions.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Returns all cells in storage order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat storage index of a coordinate, if it is on the board.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if !self.dims.contains(coord) {
            return None;
        }
        let (layer, row, col) = (coord.layer as usize, coord.row as usize, coord.col as usize);
        Some((layer * self.dims.rows + row) * self.dims.cols + col)
    }

    /// Coordinate of a flat storage index, if the index is on the board.
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        if index >= self.cells.len() {
            return None;
        }
        let per_layer = self.dims.rows * self.dims.cols;
        let layer = index / per_layer;
        let row = (index % per_layer) / self.dims.cols;
        let col = index % self.dims.cols;
        Some(Coord::layered(layer as i32, row as i32, col as i32))
    }

    /// Gets the cell at a coordinate, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index_of(coord).map(|idx| self.cells[idx])
    }

    /// Gets the cell at a flat storage index.
    pub fn get_index(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at a coordinate is on the board and empty.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Checks whether a coordinate holds the given player's mark.
    pub fn is_owned_by(&self, coord: Coord, player: Player) -> bool {
        self.get(coord) == Some(Cell::Occupied(player))
    }

    /// Sets the cell at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinate is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), MoveError> {
        let idx = self.index_of(coord).ok_or(MoveError::OutOfBounds(coord))?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Flat indices of all empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Lowest (largest-index) empty row of a column, or `None` if the column
    /// is full or off the board.
    pub fn lowest_empty_row(&self, layer: i32, col: i32) -> Option<i32> {
        (0..self.dims.rows as i32)
            .rev()
            .find(|&row| self.is_empty_at(Coord::layered(layer, row, col)))
    }

    /// Formats the board as a human-readable grid, one block per layer.
    pub fn render(&self) -> String {
        let separator = vec!["-"; self.dims.cols].join("+");
        let mut blocks = Vec::with_capacity(self.dims.layers);
        for layer in 0..self.dims.layers {
            let mut lines = Vec::with_capacity(self.dims.rows * 2);
            if self.dims.layers > 1 {
                lines.push(format!("Layer {}", layer));
            }
            for row in 0..self.dims.rows {
                let line: Vec<String> = (0..self.dims.cols)
                    .map(|col| {
                        let coord = Coord::layered(layer as i32, row as i32, col as i32);
                        self.get(coord).unwrap_or_default().symbol().to_string()
                    })
                    .collect();
                lines.push(line.join("|"));
                if row + 1 < self.dims.rows {
                    lines.push(separator.clone());
                }
            }
            blocks.push(lines.join("\n"));
        }
        blocks.join("\n\n")
    }
}

/// Lifecycle status of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Created but not yet started.
    #[default]
    Waiting,
    /// Accepting moves.
    Playing,
    /// Ended with a winner.
    Finished,
    /// Ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// Checks whether the status is terminal.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Finished | GameStatus::Draw)
    }
}

/// Where the game is being played.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Single device, local or against the computer.
    #[default]
    Offline,
    /// Two remote players.
    Online,
}
