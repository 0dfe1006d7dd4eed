//! Win detection logic for every board variant.

use super::super::{Board, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LineType {
    /// Left to right within a row.
    Row,
    /// Top to bottom within a column.
    Column,
    /// Top-left to bottom-right within a layer.
    Diagonal,
    /// Top-right to bottom-left within a layer.
    AntiDiagonal,
    /// Straight through the layers at a fixed row and column.
    Vertical,
    /// Across layers while also moving in the row and/or column.
    #[serde(rename = "3d-diagonal")]
    #[strum(serialize = "3d-diagonal")]
    ThreeDDiagonal,
}

/// A detected winning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinPattern {
    /// Orientation of the run.
    pub line: LineType,
    /// Exactly `win_length` positions, starting from the run's earliest end.
    pub positions: Vec<Coord>,
}

/// A search direction as a `(layer, row, col)` step.
struct Direction {
    step: (i32, i32, i32),
    line: LineType,
    diagonal: bool,
}

const fn dir(step: (i32, i32, i32), line: LineType, diagonal: bool) -> Direction {
    Direction {
        step,
        line,
        diagonal,
    }
}

/// In-layer directions, checked on every board in this order.
const FLAT_DIRECTIONS: [Direction; 4] = [
    dir((0, 0, 1), LineType::Row, false),
    dir((0, 1, 0), LineType::Column, false),
    dir((0, 1, 1), LineType::Diagonal, true),
    dir((0, 1, -1), LineType::AntiDiagonal, true),
];

/// Cross-layer directions, checked after the flat ones on 3D boards.
const LAYER_DIRECTIONS: [Direction; 9] = [
    dir((1, 0, 0), LineType::Vertical, false),
    // Space diagonals
    dir((1, 1, 1), LineType::ThreeDDiagonal, true),
    dir((1, 1, -1), LineType::ThreeDDiagonal, true),
    dir((1, -1, 1), LineType::ThreeDDiagonal, true),
    dir((1, -1, -1), LineType::ThreeDDiagonal, true),
    // Diagonals of the vertical planes
    dir((1, 1, 0), LineType::ThreeDDiagonal, true),
    dir((1, -1, 0), LineType::ThreeDDiagonal, true),
    dir((1, 0, 1), LineType::ThreeDDiagonal, true),
    dir((1, 0, -1), LineType::ThreeDDiagonal, true),
];

/// Checks whether the mark just placed at `last` completes a run.
///
/// Only lines through `last` are examined. Directions are tried in a fixed
/// order (row, column, diagonal, anti-diagonal, then vertical and the 3D
/// diagonals when `allow_3d` is set on a layered board) and the first
/// qualifying run is returned. Diagonal directions are skipped when
/// `allow_diagonals` is false.
#[instrument(skip(board), fields(dims = %board.dims()))]
pub fn detect_win(
    board: &Board,
    last: Coord,
    mover: Player,
    win_length: usize,
    allow_diagonals: bool,
    allow_3d: bool,
) -> Option<WinPattern> {
    if win_length == 0 || !board.is_owned_by(last, mover) {
        return None;
    }

    let cross_layer: &[Direction] = if allow_3d && board.dims().layers > 1 {
        &LAYER_DIRECTIONS
    } else {
        &[]
    };

    let pattern = FLAT_DIRECTIONS
        .iter()
        .chain(cross_layer)
        .filter(|d| allow_diagonals || !d.diagonal)
        .find_map(|d| {
            run_through(board, last, mover, d.step, win_length).map(|positions| WinPattern {
                line: d.line,
                positions,
            })
        });

    if let Some(pattern) = &pattern {
        debug!(line = %pattern.line, player = %mover, "Winning run found");
    }
    pattern
}

/// Walks back to the start of the mover's run through `from`, then forward
/// collecting it. Returns the first `win_length` cells if the run is long
/// enough.
fn run_through(
    board: &Board,
    from: Coord,
    mover: Player,
    step: (i32, i32, i32),
    win_length: usize,
) -> Option<Vec<Coord>> {
    let mut start = from;
    while board.is_owned_by(start.step_back(step), mover) {
        start = start.step_back(step);
    }

    let mut positions = Vec::with_capacity(win_length);
    let mut cursor = start;
    while board.is_owned_by(cursor, mover) {
        positions.push(cursor);
        cursor = cursor.step(step);
    }

    if positions.len() >= win_length {
        positions.truncate(win_length);
        Some(positions)
    } else {
        None
    }
}

/// Returns the first player owning a winning run anywhere on the board.
///
/// Scans every occupied cell; use [`detect_win`] when the last move is known.
pub fn find_winner(
    board: &Board,
    win_length: usize,
    allow_diagonals: bool,
    allow_3d: bool,
) -> Option<Player> {
    (0..board.cells().len())
        .filter_map(|idx| {
            let coord = board.coord_of(idx)?;
            let player = board.get(coord)?.player()?;
            detect_win(board, coord, player, win_length, allow_diagonals, allow_3d)
                .map(|_| player)
        })
        .next()
}
