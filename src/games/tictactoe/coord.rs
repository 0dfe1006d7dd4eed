//! Board coordinates shared by every variant.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell address as `(layer, row, col)`.
///
/// Flat variants always use layer 0, and the layer is omitted from the wire
/// format when it is 0. Components are signed so that malformed input (such
/// as negative values) survives until validation and is reported as out of
/// bounds rather than silently wrapped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    /// Layer index (0 for flat boards).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub layer: i32,
    /// Row index, 0 at the top.
    pub row: i32,
    /// Column index, 0 at the left.
    pub col: i32,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// Named cells of the classic board, in index order.
const CLASSIC_LABELS: [&str; 9] = [
    "top-left",
    "top-center",
    "top-right",
    "middle-left",
    "center",
    "middle-right",
    "bottom-left",
    "bottom-center",
    "bottom-right",
];

impl Coord {
    /// Creates a coordinate on a flat board.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { layer: 0, row, col }
    }

    /// Creates a coordinate on a layered board.
    pub const fn layered(layer: i32, row: i32, col: i32) -> Self {
        Self { layer, row, col }
    }

    /// Moves the coordinate by a `(layer, row, col)` step.
    pub const fn step(self, (dl, dr, dc): (i32, i32, i32)) -> Self {
        Self {
            layer: self.layer + dl,
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Moves the coordinate one step against a `(layer, row, col)` direction.
    pub const fn step_back(self, (dl, dr, dc): (i32, i32, i32)) -> Self {
        self.step((-dl, -dr, -dc))
    }

    /// Converts a classic board cell index (0-8) to a coordinate.
    pub fn from_classic_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new((index / 3) as i32, (index % 3) as i32))
    }

    /// Converts a classic board coordinate to its cell index (0-8).
    pub fn to_classic_index(self) -> Option<usize> {
        let in_range = |v: i32| (0..3).contains(&v);
        (self.layer == 0 && in_range(self.row) && in_range(self.col))
            .then(|| (self.row * 3 + self.col) as usize)
    }

    /// Label of a classic board cell ("center", "top-left", ...).
    pub fn classic_label(self) -> Option<&'static str> {
        self.to_classic_index().map(|idx| CLASSIC_LABELS[idx])
    }

    /// Parses user input into a coordinate.
    ///
    /// Accepts `row,col`, `layer,row,col` (commas or whitespace), or a
    /// classic board label such as `center`.
    #[instrument]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let lowered = trimmed.to_lowercase();
        if let Some(idx) = CLASSIC_LABELS.iter().position(|label| *label == lowered) {
            return Self::from_classic_index(idx);
        }

        let parts: Result<Vec<i32>, _> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::parse::<i32>)
            .collect();

        match parts.ok()?.as_slice() {
            [row, col] => Some(Self::new(*row, *col)),
            [layer, row, col] => Some(Self::layered(*layer, *row, *col)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.layer == 0 {
            write!(f, "({}, {})", self.row, self.col)
        } else {
            write!(f, "({}, {}, {})", self.layer, self.row, self.col)
        }
    }
}
