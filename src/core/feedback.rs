//! Guess scoring
//!
//! Each letter of a guess is classified against the target:
//! - `Correct`: right letter, right position
//! - `Present`: letter occurs elsewhere in the target
//! - `Absent`: letter not (or no longer) available in the target
//! - `Win`: the highlight given to `Correct` cells of the winning row

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Per-letter classification of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Correct,
    Present,
    Absent,
    Win,
}

impl CellStatus {
    /// Lowercase status name, as used in logs and styling
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Win => "win",
        }
    }

    /// Square emoji for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Win => '🟦',
        }
    }

    /// True for `Correct` and its winning variant
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Correct | Self::Win)
    }
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score `guess` against `target`
///
/// Exact matches are credited first and consume their target letter, then
/// the remaining guess letters are matched left to right against what is
/// left of the target. A letter is never credited more often than it
/// occurs in the target.
///
/// Both slices must have the same length.
///
/// # Examples
/// ```
/// use wordclub::core::{CellStatus, evaluate};
///
/// let target: Vec<char> = "ABBCC".chars().collect();
/// let guess: Vec<char> = "BBBBB".chars().collect();
///
/// use CellStatus::{Absent, Correct};
/// assert_eq!(
///     evaluate(&target, &guess),
///     vec![Absent, Correct, Correct, Absent, Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(target: &[char], guess: &[char]) -> Vec<CellStatus> {
    debug_assert_eq!(target.len(), guess.len(), "guess and target lengths differ");

    let mut result = vec![CellStatus::Absent; guess.len()];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();

    // First pass: exact matches. Unmatched target letters go into the pool.
    for (i, (&t, &g)) in target.iter().zip(guess).enumerate() {
        if t == g {
            result[i] = CellStatus::Correct;
        } else {
            *available.entry(t).or_insert(0) += 1;
        }
    }

    // Second pass: present elsewhere, consuming one pool instance each
    for (status, g) in result.iter_mut().zip(guess) {
        if *status == CellStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(g)
            && *count > 0
        {
            *status = CellStatus::Present;
            *count -= 1;
        }
    }

    result
}

/// The scored result of one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    statuses: Vec<CellStatus>,
}

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordclub::core::{Feedback, Word};
    ///
    /// let target = Word::parse("cercano").unwrap();
    /// let feedback = Feedback::calculate(&target, &target);
    /// assert!(feedback.is_perfect());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        Self {
            statuses: evaluate(target.letters(), guess.letters()),
        }
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[CellStatus] {
        &self.statuses
    }

    /// Check if every letter is in place
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.statuses.iter().all(|s| s.is_exact())
    }

    /// Number of cells with the given status
    #[must_use]
    pub fn count(&self, status: CellStatus) -> usize {
        self.statuses.iter().filter(|&&s| s == status).count()
    }

    /// Upgrade `Correct` cells to the winning highlight
    pub fn mark_win(&mut self) {
        for status in &mut self.statuses {
            if *status == CellStatus::Correct {
                *status = CellStatus::Win;
            }
        }
    }

    /// Emoji line such as "🟩🟨⬜🟩🟨⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|s| s.emoji()).collect()
    }
}
