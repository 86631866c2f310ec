//! Game word representation
//!
//! A `Word` is a trimmed, uppercased sequence of letters drawn from the
//! accented Latin alphabet used by the game (A-Z plus Ñ, Á, É, Í, Ó, Ú, Ü).
//! Lengths are counted in letters, never in bytes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Letters accepted on top of the ASCII uppercase alphabet
pub const EXTRA_LETTERS: [char; 7] = ['Ñ', 'Á', 'É', 'Í', 'Ó', 'Ú', 'Ü'];

/// Check whether an (already uppercased) character belongs to the game alphabet
#[inline]
#[must_use]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_uppercase() || EXTRA_LETTERS.contains(&c)
}

/// Uppercase a single typed character, returning it only if it is a game letter
///
/// # Examples
/// ```
/// use wordclub::core::normalize_letter;
///
/// assert_eq!(normalize_letter('ñ'), Some('Ñ'));
/// assert_eq!(normalize_letter('7'), None);
/// ```
#[must_use]
pub fn normalize_letter(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(letter), None) if is_letter(letter) => Some(letter),
        _ => None,
    }
}

/// Reasons a guess (or a configured target) is rejected
///
/// The `Display` text is the message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("El juego ha terminado.")]
    GameOver,
    #[error("La palabra debe tener {expected} letras.")]
    WrongLength { expected: usize, actual: usize },
    #[error("Solo letras permitidas.")]
    InvalidCharacters,
    #[error("La palabra no puede estar vacía.")]
    Empty,
}

/// A validated, uppercase game word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Uppercase letter by letter; characters without a single-letter
/// uppercase form are kept as typed and fail validation later
fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| normalize_letter(c).unwrap_or(c))
        .collect()
}

impl Word {
    /// Parse a word of any non-zero length
    ///
    /// # Errors
    /// Returns [`GuessError::Empty`] for blank input and
    /// [`GuessError::InvalidCharacters`] if anything but game letters remain
    /// after trimming and uppercasing.
    ///
    /// # Examples
    /// ```
    /// use wordclub::core::Word;
    ///
    /// let word = Word::parse(" cercano ").unwrap();
    /// assert_eq!(word.text(), "CERCANO");
    /// assert_eq!(word.len(), 7);
    ///
    /// assert!(Word::parse("cerc4no").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let text = normalize(input);
        if text.is_empty() {
            return Err(GuessError::Empty);
        }
        Self::from_normalized(text)
    }

    /// Parse a guess that must have exactly `expected` letters
    ///
    /// Length is checked before the alphabet, so `"abc1"` against a
    /// seven-letter target reports the length problem.
    ///
    /// # Errors
    /// Returns [`GuessError::WrongLength`] or [`GuessError::InvalidCharacters`].
    pub fn with_length(input: &str, expected: usize) -> Result<Self, GuessError> {
        let text = normalize(input);
        let actual = text.chars().count();
        if actual != expected {
            return Err(GuessError::WrongLength { expected, actual });
        }
        Self::from_normalized(text)
    }

    fn from_normalized(text: String) -> Result<Self, GuessError> {
        if !text.chars().all(is_letter) {
            return Err(GuessError::InvalidCharacters);
        }
        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a parsed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }
}

impl FromStr for Word {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
