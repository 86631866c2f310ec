//! Game session: the board controller
//!
//! A `Session` owns everything one game needs: the target, the board, the
//! attempt counter, the cursor and the status line. Input surfaces drive it
//! through [`Session::apply`] or the individual operations, and renderers
//! read it back through the accessors. It never touches the terminal.

use super::board::Board;
use super::config::GameConfig;
use super::input::{Command, Direction};
use crate::core::{Feedback, GuessError, Word, normalize_letter};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Result of a guess submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed except the status message
    Rejected(GuessError),
    /// Row scored; `attempt` is the new editable row
    Continue { attempt: usize },
    Won { attempts: usize },
    Lost,
}

impl Outcome {
    /// True if a row was scored
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    target: Word,
    board: Board,
    attempt: usize,
    state: GameState,
    active_col: usize,
    message: String,
}

impl Session {
    /// Start a game with a target drawn from `config`
    ///
    /// # Examples
    /// ```
    /// use wordclub::game::{GameConfig, GameState, Outcome, Session};
    ///
    /// let mut session = Session::new(GameConfig::fixed("cercano", 4).unwrap());
    /// assert_eq!(session.message(), "Palabra de 7 letras. ¡Tienes 4 intentos!");
    ///
    /// assert_eq!(session.submit(Some("cercano")), Outcome::Won { attempts: 1 });
    /// assert_eq!(session.state(), GameState::Won);
    /// ```
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let target = config.pick_target();
        let board = Board::new(config.max_attempts(), target.len());
        let message = format!(
            "Palabra de {} letras. ¡Tienes {} intentos!",
            target.len(),
            config.max_attempts()
        );
        debug!(letters = target.len(), attempts = config.max_attempts(), "new game");

        Self {
            config,
            target,
            board,
            attempt: 0,
            state: GameState::InProgress,
            active_col: 0,
            message,
        }
    }

    /// Throw the current game away and start over with a fresh target
    pub fn restart(&mut self) {
        *self = Self::new(self.config.clone());
        info!("game restarted");
    }

    /// Dispatch one input command
    ///
    /// Returns the outcome for submissions and `None` for editing commands.
    pub fn apply(&mut self, command: Command) -> Option<Outcome> {
        match command {
            Command::Submit(text) => return Some(self.submit(text.as_deref())),
            Command::Type(c) => {
                self.type_letter(c);
            }
            Command::Erase => self.erase(),
            Command::Navigate(Direction::Left) => self.move_left(),
            Command::Navigate(Direction::Right) => self.move_right(),
            Command::Select { row, col } => {
                self.select(row, col);
            }
            Command::NewGame => self.restart(),
        }
        None
    }

    /// Submit a guess
    ///
    /// A non-blank `input` is used as typed; otherwise the letters of the
    /// active row are submitted. Rejected guesses leave the board and the
    /// attempt counter untouched.
    pub fn submit(&mut self, input: Option<&str>) -> Outcome {
        if self.state != GameState::InProgress {
            return self.reject(GuessError::GameOver);
        }

        let raw = match input {
            Some(text) if !text.trim().is_empty() => text.to_owned(),
            _ => self.current_row_text(),
        };
        let guess = match Word::with_length(&raw, self.word_length()) {
            Ok(guess) => guess,
            Err(err) => return self.reject(err),
        };

        let won = guess == self.target;
        let mut feedback = Feedback::calculate(&guess, &self.target);
        if won {
            feedback.mark_win();
        }
        let scored = self.board.score_row(self.attempt, &guess, &feedback);
        debug_assert!(scored, "active row was already scored");
        debug!(
            attempt = self.attempt,
            guess = %guess,
            feedback = %feedback.to_emoji(),
            "scored guess"
        );

        if won {
            self.state = GameState::Won;
            self.message = "¡Acertaste!".to_string();
            let attempts = self.attempt + 1;
            info!(attempts, "game won");
            return Outcome::Won { attempts };
        }

        if self.attempt + 1 >= self.config.max_attempts() {
            self.state = GameState::Lost;
            self.message = format!("Has perdido. La palabra era: {}", self.target);
            info!(target_word = %self.target, "game lost");
            return Outcome::Lost;
        }

        self.attempt += 1;
        self.active_col = 0;
        self.message = format!("Intento {} de {}", self.attempt + 1, self.config.max_attempts());
        Outcome::Continue {
            attempt: self.attempt,
        }
    }

    fn reject(&mut self, err: GuessError) -> Outcome {
        debug!(error = %err, "guess rejected");
        self.message = err.to_string();
        Outcome::Rejected(err)
    }

    /// Type a letter into the active cell and advance the cursor
    ///
    /// Returns `false` if the character is not a game letter or the game is over.
    pub fn type_letter(&mut self, c: char) -> bool {
        if !self.is_in_progress() {
            return false;
        }
        let Some(letter) = normalize_letter(c) else {
            return false;
        };
        self.board
            .set_letter(self.attempt, self.active_col, Some(letter));
        self.move_right();
        true
    }

    /// Clear the active cell, or step back and clear the previous one if it is empty
    pub fn erase(&mut self) {
        if !self.is_in_progress() {
            return;
        }
        if self.board.letter(self.attempt, self.active_col).is_none() {
            self.active_col = self.active_col.saturating_sub(1);
        }
        self.board.set_letter(self.attempt, self.active_col, None);
    }

    pub fn move_left(&mut self) {
        if self.is_in_progress() {
            self.active_col = self.active_col.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if self.is_in_progress() {
            self.active_col = (self.active_col + 1).min(self.word_length() - 1);
        }
    }

    /// Move the cursor to a cell; only cells of the active row can be selected
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        if !self.is_in_progress() || row != self.attempt || col >= self.word_length() {
            return false;
        }
        self.active_col = col;
        true
    }

    fn current_row_text(&self) -> String {
        self.board
            .row(self.attempt)
            .map(super::board::Row::text)
            .unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.state == GameState::InProgress
    }

    /// Index of the editable row (the last scored row once the game is over)
    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    /// Number of rows scored so far
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        match self.state {
            GameState::InProgress => self.attempt,
            GameState::Won | GameState::Lost => self.attempt + 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts()
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The editable cell, while the game is running
    #[must_use]
    pub fn active_cell(&self) -> Option<(usize, usize)> {
        self.is_in_progress()
            .then_some((self.attempt, self.active_col))
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}
