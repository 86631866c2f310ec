//! Terminal input surface and TUI entry point

use super::layout::{board_grid, cell_at, screen_layout};
use crate::core::normalize_letter;
use crate::game::{Command, Direction, InputSurface, Outcome, Session, Signal, drive};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Longest text accepted in the whole-word entry line
const MAX_WORD_INPUT: usize = 32;

/// Which part of the screen receives typed characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Letters go into the active cell of the board
    #[default]
    Cells,
    /// Letters go into the whole-word entry line
    Word,
}

/// Keyboard and mouse adapter over crossterm events
#[derive(Debug, Default)]
pub struct TerminalInput {
    mode: InputMode,
    word_input: String,
}

impl TerminalInput {
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn word_input(&self) -> &str {
        &self.word_input
    }

    fn submit(&self) -> Signal {
        let text = (!self.word_input.trim().is_empty()).then(|| self.word_input.clone());
        Signal::Command(Command::Submit(text))
    }

    /// Map a key press to a signal
    pub fn translate_key(&mut self, key: KeyEvent, session: &Session) -> Signal {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Signal::Close,
                KeyCode::Char('n') => {
                    self.word_input.clear();
                    self.mode = InputMode::Cells;
                    Signal::Command(Command::NewGame)
                }
                _ => Signal::Idle,
            };
        }

        if !session.is_in_progress() {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('q' | 'Q') => Signal::Close,
                _ => Signal::Idle,
            };
        }

        match self.mode {
            InputMode::Cells => match key.code {
                KeyCode::Esc => Signal::Close,
                KeyCode::Tab => {
                    self.mode = InputMode::Word;
                    Signal::Idle
                }
                KeyCode::Char(c) if normalize_letter(c).is_some() => {
                    Signal::Command(Command::Type(c))
                }
                KeyCode::Backspace => Signal::Command(Command::Erase),
                KeyCode::Left => Signal::Command(Command::Navigate(Direction::Left)),
                KeyCode::Right => Signal::Command(Command::Navigate(Direction::Right)),
                KeyCode::Enter => self.submit(),
                _ => Signal::Idle,
            },
            InputMode::Word => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.mode = InputMode::Cells;
                    Signal::Idle
                }
                KeyCode::Char(c) => {
                    if self.word_input.chars().count() < MAX_WORD_INPUT {
                        self.word_input.push(c);
                    }
                    Signal::Idle
                }
                KeyCode::Backspace => {
                    self.word_input.pop();
                    Signal::Idle
                }
                KeyCode::Enter => self.submit(),
                _ => Signal::Idle,
            },
        }
    }

    /// Map a mouse event to a signal; a left click on the board selects a cell
    pub fn translate_mouse(&mut self, mouse: MouseEvent, session: &Session, screen: Rect) -> Signal {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Signal::Idle;
        }

        let board = session.board();
        let grid = board_grid(screen_layout(screen).board, board.height(), board.width());
        match cell_at(grid, board.height(), board.width(), mouse.column, mouse.row) {
            Some((row, col)) if session.active_cell().is_some_and(|(r, _)| r == row) => {
                self.mode = InputMode::Cells;
                Signal::Command(Command::Select { row, col })
            }
            _ => Signal::Idle,
        }
    }
}

impl InputSurface for TerminalInput {
    fn poll(&mut self, session: &Session) -> Result<Signal> {
        let signal = match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.translate_key(key, session),
            Event::Mouse(mouse) => {
                let (width, height) = terminal::size()?;
                self.translate_mouse(mouse, session, Rect::new(0, 0, width, height))
            }
            _ => Signal::Idle,
        };
        Ok(signal)
    }

    fn on_outcome(&mut self, outcome: &Outcome) {
        if outcome.is_accepted() {
            self.word_input.clear();
            self.mode = InputMode::Cells;
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut session: Session) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut input = TerminalInput::default();
    let res = drive(&mut session, &mut input, |session, input| {
        terminal.draw(|f| super::rendering::ui(f, session, input))?;
        Ok(())
    });

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}
