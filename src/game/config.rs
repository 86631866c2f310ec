//! Game configuration
//!
//! Where target words come from and how many attempts a game allows.

use crate::core::{GuessError, Word};
use rand::Rng;

/// Target used when none is configured
pub const DEFAULT_TARGET: &str = "CERCANO";

/// Number of rows on the board
pub const DEFAULT_MAX_ATTEMPTS: usize = 4;

/// Source of target words, consulted at every game start
#[derive(Debug, Clone, PartialEq, Eq)]
enum TargetPool {
    Fixed(Word),
    /// Never empty; only [`GameConfig::random`] builds it
    Random(Vec<Word>),
}

impl TargetPool {
    fn pick(&self) -> Word {
        match self {
            Self::Fixed(word) => word.clone(),
            Self::Random(words) => {
                let index = rand::rng().random_range(0..words.len());
                words[index].clone()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    targets: TargetPool,
    max_attempts: usize,
}

impl GameConfig {
    /// Fixed-target configuration
    ///
    /// # Errors
    /// Returns a [`GuessError`] if `target` is not a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordclub::game::GameConfig;
    ///
    /// let config = GameConfig::fixed("cercano", 4).unwrap();
    /// assert_eq!(config.max_attempts(), 4);
    /// assert!(GameConfig::fixed("c3rcano", 4).is_err());
    /// ```
    pub fn fixed(target: &str, max_attempts: usize) -> Result<Self, GuessError> {
        Ok(Self {
            targets: TargetPool::Fixed(Word::parse(target)?),
            max_attempts: max_attempts.max(1),
        })
    }

    /// Random-target configuration over `words`
    ///
    /// # Errors
    /// Returns [`GuessError::Empty`] if there are no words to draw from.
    pub fn random(words: Vec<Word>, max_attempts: usize) -> Result<Self, GuessError> {
        if words.is_empty() {
            return Err(GuessError::Empty);
        }
        Ok(Self {
            targets: TargetPool::Random(words),
            max_attempts: max_attempts.max(1),
        })
    }

    /// Rows on the board, always at least one
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// True if every game draws a fresh target
    #[must_use]
    pub const fn is_random(&self) -> bool {
        matches!(self.targets, TargetPool::Random(_))
    }

    /// Pick the target for a new game
    #[must_use]
    pub fn pick_target(&self) -> Word {
        self.targets.pick()
    }
}
