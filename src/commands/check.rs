//! One-shot guess check
//!
//! Scores a single guess against a target without starting a game.

use crate::core::{Feedback, GuessError, Word};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub feedback: Feedback,
}

impl CheckResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.feedback.is_perfect()
    }
}

/// Validate `guess` against the target's length and score it
///
/// # Errors
///
/// Returns a [`GuessError`] if the guess has the wrong length or contains
/// characters outside the game alphabet.
///
/// # Examples
/// ```
/// use wordclub::commands::check_guess;
/// use wordclub::core::Word;
///
/// let target = Word::parse("cercano").unwrap();
/// let result = check_guess(&target, "anoraco").unwrap();
/// assert_eq!(result.feedback.to_emoji(), "⬜🟨⬜🟨🟩🟨🟩");
/// ```
pub fn check_guess(target: &Word, guess: &str) -> Result<CheckResult, GuessError> {
    let guess = Word::with_length(guess, target.len())?;
    let mut feedback = Feedback::calculate(&guess, target);
    if guess == *target {
        feedback.mark_win();
    }
    Ok(CheckResult { guess, feedback })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellStatus;

    fn target() -> Word {
        Word::parse("cercano").unwrap()
    }

    #[test]
    fn check_exact_match_is_win() {
        let result = check_guess(&target(), "Cercano").unwrap();
        assert!(result.is_win());
        assert_eq!(result.feedback.count(CellStatus::Win), 7);
    }

    #[test]
    fn check_partial_match() {
        let result = check_guess(&target(), "caminar").unwrap();
        assert!(!result.is_win());
        assert_eq!(result.guess.text(), "CAMINAR");
        // C exact; the A at 1 takes the only A, so the A at 5 is absent; N and R misplaced
        assert_eq!(
            result.feedback.statuses(),
            &[
                CellStatus::Correct,
                CellStatus::Present,
                CellStatus::Absent,
                CellStatus::Absent,
                CellStatus::Present,
                CellStatus::Absent,
                CellStatus::Present,
            ]
        );
    }

    #[test]
    fn check_rejects_bad_input() {
        assert!(matches!(
            check_guess(&target(), "corto"),
            Err(GuessError::WrongLength {
                expected: 7,
                actual: 5
            })
        ));
        assert_eq!(
            check_guess(&target(), "cerca-o"),
            Err(GuessError::InvalidCharacters)
        );
    }
}
