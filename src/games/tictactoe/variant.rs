//! Board variants and their fixed configuration.

use super::types::Dimensions;
use serde::{Deserialize, Serialize};

/// A named board configuration.
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
pub enum Variant {
    /// Traditional 3x3 grid.
    #[default]
    Classic,
    /// 4x4 grid, four in a row.
    Extended4,
    /// 5x5 grid, four in a row.
    Extended5,
    /// 6x7 grid where pieces drop to the lowest empty cell of a column.
    #[serde(rename = "connect4")]
    #[strum(serialize = "connect4")]
    ConnectFour,
    /// Three stacked 3x3 layers.
    #[serde(rename = "3d")]
    #[strum(serialize = "3d")]
    ThreeD,
}

/// Immutable rules record for a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConfig {
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Rows per layer.
    pub rows: usize,
    /// Columns per row.
    pub cols: usize,
    /// Number of layers (1 unless the variant is 3D).
    pub layers: usize,
    /// Run length required to win.
    pub win_length: usize,
    /// Whether diagonal lines count.
    pub allow_diagonals: bool,
    /// Whether lines may cross layers.
    pub allow_3d: bool,
    /// Whether pieces must drop to the lowest empty cell of their column.
    pub gravity: bool,
}

impl VariantConfig {
    /// Board dimensions for this variant.
    pub const fn dims(&self) -> Dimensions {
        Dimensions::layered(self.layers, self.rows, self.cols)
    }
}

const CLASSIC: VariantConfig = VariantConfig {
    name: "Classic Tic Tac Toe",
    description: "Traditional 3×3 grid",
    rows: 3,
    cols: 3,
    layers: 1,
    win_length: 3,
    allow_diagonals: true,
    allow_3d: false,
    gravity: false,
};

const EXTENDED_4: VariantConfig = VariantConfig {
    name: "Extended 4×4",
    description: "Larger 4×4 grid",
    rows: 4,
    cols: 4,
    layers: 1,
    win_length: 4,
    allow_diagonals: true,
    allow_3d: false,
    gravity: false,
};

const EXTENDED_5: VariantConfig = VariantConfig {
    name: "Extended 5×5",
    description: "Large 5×5 grid",
    rows: 5,
    cols: 5,
    layers: 1,
    win_length: 4,
    allow_diagonals: true,
    allow_3d: false,
    gravity: false,
};

const CONNECT_FOUR: VariantConfig = VariantConfig {
    name: "Connect Four",
    description: "Drop pieces vertically",
    rows: 6,
    cols: 7,
    layers: 1,
    win_length: 3,
    allow_diagonals: true,
    allow_3d: false,
    gravity: true,
};

const THREE_D: VariantConfig = VariantConfig {
    name: "3D Tic Tac Toe",
    description: "Three layered boards",
    rows: 3,
    cols: 3,
    layers: 3,
    win_length: 3,
    allow_diagonals: true,
    allow_3d: true,
    gravity: false,
};

impl Variant {
    /// Returns the configuration record for this variant.
    pub fn config(self) -> &'static VariantConfig {
        match self {
            Variant::Classic => &CLASSIC,
            Variant::Extended4 => &EXTENDED_4,
            Variant::Extended5 => &EXTENDED_5,
            Variant::ConnectFour => &CONNECT_FOUR,
            Variant::ThreeD => &THREE_D,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_win_lengths() {
        assert_eq!(Variant::Classic.config().win_length, 3);
        assert_eq!(Variant::Extended4.config().win_length, 4);
        assert_eq!(Variant::Extended5.config().win_length, 4);
        assert_eq!(Variant::ConnectFour.config().win_length, 3);
        assert_eq!(Variant::ThreeD.config().win_length, 3);
    }

    #[test]
    fn test_only_connect_four_has_gravity() {
        assert!(Variant::ConnectFour.config().gravity);
        assert!(!Variant::Classic.config().gravity);
        assert!(Variant::ThreeD.config().allow_3d);
        assert_eq!(Variant::ThreeD.config().dims(), Dimensions::layered(3, 3, 3));
    }

    #[test]
    fn test_wire_tags() {
        assert_eq!(Variant::from_str("connect4").unwrap(), Variant::ConnectFour);
        assert_eq!(Variant::from_str("3D").unwrap(), Variant::ThreeD);
        assert_eq!(Variant::Extended5.to_string(), "extended5");
        assert_eq!(
            serde_json::to_string(&Variant::ThreeD).unwrap(),
            r#""3d""#
        );
    }
}
