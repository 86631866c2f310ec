//! Game state and control
//!
//! The board model, the session state machine that drives it, and the
//! input abstraction front ends plug into.

mod board;
mod config;
mod input;
mod session;

pub use board::{Board, Cell, Row};
pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TARGET, GameConfig};
pub use input::{Command, Direction, InputSurface, Signal, drive};
pub use session::{GameState, Outcome, Session};
