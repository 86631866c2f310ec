//! Formatting utilities for terminal output

use crate::core::{CellStatus, Feedback};
use crate::game::{GameState, Row, Session};
use colored::{ColoredString, Colorize};

/// Color one board cell
#[must_use]
pub fn colored_cell(letter: Option<char>, status: Option<CellStatus>) -> ColoredString {
    let padded = format!(" {} ", letter.unwrap_or('·'));
    let text = padded.as_str();
    match status {
        Some(CellStatus::Correct) => text.black().on_green().bold(),
        Some(CellStatus::Present) => text.black().on_yellow().bold(),
        Some(CellStatus::Absent) => text.white().on_bright_black(),
        Some(CellStatus::Win) => text.black().on_bright_cyan().bold(),
        None if letter.is_some() => text.bright_white().bold(),
        None => text.bright_black(),
    }
}

/// Color a whole row, cells separated by a space
#[must_use]
pub fn colored_row(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| colored_cell(cell.letter, cell.status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Color a guess/feedback pair outside of a board
#[must_use]
pub fn colored_guess(letters: &[char], feedback: &Feedback) -> String {
    letters
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| colored_cell(Some(letter), Some(status)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emoji squares for a scored row, `None` for rows not scored yet
#[must_use]
pub fn row_emoji(row: &Row) -> Option<String> {
    if !row.is_scored() {
        return None;
    }
    row.cells()
        .iter()
        .map(|cell| cell.status.map(CellStatus::emoji))
        .collect()
}

/// Spoiler-free result grid, e.g. "WordClub 2/4" followed by one emoji line per guess
#[must_use]
pub fn share_text(session: &Session) -> String {
    let score = match session.state() {
        GameState::Won => session.attempts_used().to_string(),
        GameState::Lost => "X".to_string(),
        GameState::InProgress => "-".to_string(),
    };
    let mut lines = vec![format!("WordClub {score}/{}", session.max_attempts())];
    lines.extend(session.board().rows().iter().filter_map(row_emoji));
    lines.join("\n")
}
