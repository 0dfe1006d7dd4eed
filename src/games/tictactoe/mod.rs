//! Tic-tac-toe variants: model, rules and computer opponent.

mod action;
mod contracts;
mod coord;
pub mod invariants;
pub mod opponent;
pub mod rules;
mod state;
mod types;
mod variant;

pub use action::{Move, MoveError};
pub use contracts::{
    CellIsEmpty, Contract, DropsToLowest, GameActive, LegalMove, MoveContract, Placement,
    PlayersTurn, WithinBounds,
};
pub use coord::Coord;
pub use opponent::{Difficulty, Opponent, OpponentError, compute_opponent_move};
pub use rules::{LineType, WinPattern, detect_win};
pub use state::{
    GameState, StateShapeError, apply_move, create_game_state, generate_game_id, is_draw,
    is_terminal, validate_move,
};
pub use types::{Board, BoardShapeError, Cell, Dimensions, GameMode, GameStatus, Player};
pub use variant::{Variant, VariantConfig};
