//! Line-oriented terminal front end.

mod console;
mod orchestrator;
mod seats;
mod session;

pub use console::Console;
pub use orchestrator::Orchestrator;
pub use seats::{ComputerSeat, HumanSeat, Seat};
pub use session::{list_variants, run_play, run_selfplay};
