//! Core domain types for WordClub
//!
//! Pure word validation and guess scoring, with no UI or I/O.

mod feedback;
mod word;

pub use feedback::{CellStatus, Feedback, evaluate};
pub use word::{EXTRA_LETTERS, GuessError, Word, is_letter, normalize_letter};
