//! Simple line-mode game
//!
//! Text-based play without the TUI: one guess per line.

use crate::game::{Command, InputSurface, Session, Signal, drive};
use crate::output::{print_board, share_text};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Reads one command per line
pub struct LineInput<R> {
    reader: R,
    prompt: bool,
}

impl<R: BufRead> LineInput<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            prompt: true,
        }
    }

    /// Skip the "> " prompt (for piped input)
    #[must_use]
    pub fn without_prompt(mut self) -> Self {
        self.prompt = false;
        self
    }

    /// Map one input line to a signal
    #[must_use]
    pub fn translate_line(line: &str) -> Signal {
        match line.trim().to_lowercase().as_str() {
            "salir" | "quit" | "exit" => Signal::Close,
            "nuevo" | "new" => Signal::Command(Command::NewGame),
            _ => Signal::Command(Command::Submit(Some(line.trim().to_string()))),
        }
    }
}

impl<R: BufRead> InputSurface for LineInput<R> {
    fn poll(&mut self, _session: &Session) -> Result<Signal> {
        if self.prompt {
            print!("  > ");
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(Signal::Close);
        }
        Ok(Self::translate_line(&line))
    }
}

/// Run the simple line-mode game on stdin
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple(mut session: Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                          WordClub                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("\nEscribe una palabra y pulsa Enter. 'nuevo' reinicia, 'salir' termina.");

    let stdin = io::stdin();
    let mut input = LineInput::new(stdin.lock());
    drive(&mut session, &mut input, |session, _| {
        print_board(session);
        if !session.is_in_progress() {
            println!("\n{}\n", share_text(session).bright_white());
            println!("  Escribe 'nuevo' para jugar otra vez o 'salir' para terminar.");
        }
        Ok(())
    })?;

    println!("\n¡Hasta pronto!\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameState};

    fn play(script: &str) -> Session {
        let mut session = Session::new(GameConfig::fixed("cercano", 4).unwrap());
        let mut input = LineInput::new(script.as_bytes()).without_prompt();
        drive(&mut session, &mut input, |_, _| Ok(())).unwrap();
        session
    }

    #[test]
    fn translate_line_commands() {
        assert_eq!(LineInput::<&[u8]>::translate_line("salir\n"), Signal::Close);
        assert_eq!(
            LineInput::<&[u8]>::translate_line(" NUEVO "),
            Signal::Command(Command::NewGame)
        );
        assert_eq!(
            LineInput::<&[u8]>::translate_line("cercano\n"),
            Signal::Command(Command::Submit(Some("cercano".to_string())))
        );
    }

    #[test]
    fn lines_play_a_game() {
        let session = play("corto\nanoraco\ncercano\n");
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.attempts_used(), 2);
    }

    #[test]
    fn eof_closes() {
        let session = play("anoraco\n");
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempt(), 1);
    }

    #[test]
    fn salir_stops_reading() {
        let session = play("salir\ncercano\n");
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempt(), 0);
    }

    #[test]
    fn nuevo_restarts_after_loss() {
        let session = play("caminar\nventana\ncaballo\nplaneta\nnuevo\n");
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempt(), 0);
        assert!(!session.board().row(0).unwrap().is_scored());
    }
}
