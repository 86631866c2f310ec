//! Target word pools
//!
//! An embedded list of seven-letter Spanish words for random games, plus a
//! loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{TARGETS, TARGETS_COUNT};
