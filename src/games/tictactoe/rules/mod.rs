//! Game rules for tic-tac-toe variants.
//!
//! This module contains pure functions for evaluating boards
//! according to the variant rules. Rules are separated from board
//! storage to enable composition into contract systems.

pub mod draw;
pub mod win;

pub use draw::{is_drawn, is_full};
pub use win::{LineType, WinPattern, detect_win, find_winner};
