//! WordClub
//!
//! A Wordle-style game with seven-letter Spanish words, played on a
//! terminal board.
//!
//! # Quick Start
//!
//! ```rust
//! use wordclub::game::{GameConfig, GameState, Session};
//!
//! let mut session = Session::new(GameConfig::fixed("cercano", 4).unwrap());
//!
//! // Type into the cells of the active row, then submit it
//! for letter in "anoraco".chars() {
//!     session.type_letter(letter);
//! }
//! let _ = session.submit(None);
//! assert_eq!(session.message(), "Intento 2 de 4");
//!
//! // Or submit a whole word at once
//! let _ = session.submit(Some("cercano"));
//! assert_eq!(session.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Board, session state machine and input abstraction
pub mod game;

// Target word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
