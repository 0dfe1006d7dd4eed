//! Strictly Tictac - tic-tac-toe variants rules engine
//!
//! Board model, move validation, move application and win detection for
//! classic 3x3, extended 4x4 and 5x5, gravity (Connect Four style) and
//! three-layer 3D boards, plus a computer opponent for the classic board.
//!
//! # Architecture
//!
//! - **Games**: board, validator, applicator, win detector, opponent search
//! - **Record**: finished-game records and player statistics
//! - **Config**: TOML settings for terminal games
//! - **Terminal**: line-oriented front end used by the `tictac` binary
//!
//! # Example
//!
//! ```
//! use strictly_tictac::{Coord, GameMode, GameStatus, Player, Variant, create_game_state};
//!
//! let state = create_game_state(Variant::Classic, GameMode::Offline).start();
//! let state = state.apply_move(Coord::new(1, 1), Player::X)?;
//! assert_eq!(state.active_player(), Player::O);
//! assert_eq!(state.status(), GameStatus::Playing);
//! # Ok::<(), strictly_tictac::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod record;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardShapeError, Cell, CellIsEmpty, Contract, Coord, Difficulty, Dimensions,
    DropsToLowest, GameActive, GameMode, GameState, GameStatus, LegalMove, LineType, Move,
    MoveContract, MoveError, Opponent, OpponentError, Placement, Player, PlayersTurn,
    StateShapeError, Variant, VariantConfig, WinPattern, WithinBounds, apply_move,
    compute_opponent_move, create_game_state, detect_win, generate_game_id, is_draw, is_terminal,
    validate_move,
};

// Crate-level exports - Opponent tiers
pub use games::tictactoe::opponent::{easy_move, hard_move, medium_move};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, StatusConsistentInvariant,
};
pub use games::tictactoe::rules::{find_winner, is_drawn, is_full};

// Crate-level exports - Records
pub use record::{
    DEFAULT_PLAYER_O, DEFAULT_PLAYER_X, GameOutcome, GameRecord, GameRecorder, MemoryRecorder,
    PlayerStats, RecordError,
};

// Crate-level exports - Terminal front end
pub use terminal::{
    ComputerSeat, Console, HumanSeat, Orchestrator, Seat, list_variants, run_play, run_selfplay,
};
