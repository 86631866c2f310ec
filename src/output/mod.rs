//! Terminal output formatting
//!
//! Colored board rows and share-style summaries for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_message};
pub use formatters::share_text;
