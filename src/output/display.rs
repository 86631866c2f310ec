//! Display functions for line-mode output

use super::formatters::{colored_guess, colored_row};
use crate::core::{Feedback, Word};
use crate::game::{GameState, Session};
use colored::Colorize;

/// Print the board followed by the status line
pub fn print_board(session: &Session) {
    println!();
    for (index, row) in session.board().rows().iter().enumerate() {
        let marker = if session.active_cell().is_some_and(|(r, _)| r == index) {
            "›".bright_yellow().bold()
        } else {
            " ".normal()
        };
        println!("  {marker} {}", colored_row(row));
    }
    println!();
    print_message(session);
}

/// Print the status line, colored by game state
pub fn print_message(session: &Session) {
    let message = match session.state() {
        GameState::InProgress => session.message().cyan(),
        GameState::Won => session.message().green().bold(),
        GameState::Lost => session.message().red().bold(),
    };
    println!("  {message}");
}

/// Print the result of a one-shot check
pub fn print_check_result(guess: &Word, feedback: &Feedback) {
    println!("\n  {}", colored_guess(guess.letters(), feedback));
    println!("  {}\n", feedback.to_emoji());
    if feedback.is_perfect() {
        println!("  {}", "¡Acertaste!".green().bold());
    }
}
