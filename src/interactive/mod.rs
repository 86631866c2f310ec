//! Interactive terminal board
//!
//! ratatui rendering plus a crossterm-backed [`InputSurface`](crate::game::InputSurface).

mod app;
pub mod layout;
mod rendering;

pub use app::{InputMode, TerminalInput, run_tui};
