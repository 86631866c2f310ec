//! Word list loading utilities

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load target words from a file, one per line
///
/// Blank lines and lines starting with `#` are ignored. Entries that are
/// not valid words, or whose length differs from the first valid entry,
/// are skipped with a warning so every game in a pool has the same width.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordclub::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    Ok(uniform_words(lines))
}

/// Convert an embedded string slice to words
///
/// # Examples
/// ```
/// use wordclub::wordlists::loader::words_from_slice;
/// use wordclub::wordlists::TARGETS;
///
/// let words = words_from_slice(TARGETS);
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    uniform_words(slice.iter().copied())
}

fn uniform_words<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();
    for entry in entries {
        match Word::parse(entry) {
            Ok(word) if words.first().is_none_or(|first| first.len() == word.len()) => {
                words.push(word);
            }
            Ok(word) => warn!(word = %word, "skipping word of different length"),
            Err(err) => warn!(entry, error = %err, "skipping invalid word"),
        }
    }
    words
}
