//! Secret word selection
//!
//! The engine gets its secret from a `WordProvider`: a deterministic mapping
//! from a day index to a word. The default provider walks the embedded answer
//! list; a custom list can be loaded from a file.

mod day;
mod embedded;
pub mod loader;

pub use day::{DAY_STRIDE, DayIndex};
pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use std::path::{Path, PathBuf};

/// Deterministic source of the secret word for a day
pub trait WordProvider {
    /// Secret word for `day`; the same day always yields the same word
    fn word_for_day(&self, day: u32) -> Word;
}

/// Errors building a word list
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("word list contains no valid words")]
    Empty,

    #[error("failed to read word list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Provider cycling through a fixed, non-empty list
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Wrap a list of words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The answer list compiled into the binary
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no embedded entry is a valid word.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(loader::parse_entries(ANSWERS.iter().copied()))
    }

    /// Load a list from a file, one word per line
    ///
    /// # Errors
    /// Returns `WordListError::Read` if the file cannot be read, or
    /// `WordListError::Empty` if it holds no valid words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        Self::new(loader::read_list(path.as_ref())?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a list built through `new`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl WordProvider for WordList {
    fn word_for_day(&self, day: u32) -> Word {
        self.words[day as usize % self.words.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    fn list(words: &[&str]) -> WordList {
        WordList::new(loader::parse_entries(words.iter().copied())).unwrap()
    }

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), WORD_LENGTH, "Word '{word}' is not {WORD_LENGTH} letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_covers_every_answer() {
        let embedded = WordList::embedded().unwrap();
        assert_eq!(embedded.len(), ANSWERS_COUNT);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(WordList::new(Vec::new()), Err(WordListError::Empty)));
    }

    #[test]
    fn word_for_day_is_deterministic() {
        let words = list(&["fiona", "crane", "slate"]);
        assert_eq!(words.word_for_day(1), words.word_for_day(1));
        assert_eq!(words.word_for_day(0).text(), "fiona");
        assert_eq!(words.word_for_day(2).text(), "slate");
    }

    #[test]
    fn word_for_day_wraps_around() {
        let words = list(&["fiona", "crane", "slate"]);
        assert_eq!(words.word_for_day(3).text(), "fiona");
        assert_eq!(words.word_for_day(1097).text(), words.word_for_day(2).text());
    }

    #[test]
    fn from_file_with_no_valid_words_is_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "123\n\n").unwrap();
        assert!(matches!(
            WordList::from_file(file.path()),
            Err(WordListError::Empty)
        ));
    }
}
