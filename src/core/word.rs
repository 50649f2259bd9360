//! Secret word representation
//!
//! A Word is the validated, lowercase form of a puzzle answer. Its letters are
//! indexed once so the per-cell color rule can ask "does the secret contain this
//! letter?" without rescanning.

use rustc_hash::FxHashSet;
use std::fmt;

/// Answer length accepted from word lists
pub const WORD_LENGTH: usize = 5;

/// A lowercase ASCII puzzle word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    ///
    /// let word = Word::new("Fiona").unwrap();
    /// assert_eq!(word.text(), "fiona");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: Vec<char> = text.chars().collect();
        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Never true for a Word built through `new`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Letter at `position`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("fiona").unwrap();
        assert_eq!(word.text(), "fiona");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("FIONA").unwrap();
        assert_eq!(word.text(), "fiona");

        let word2 = Word::new("FiOnA").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("puzzles").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_invalid() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(Word::new("café"), Err(WordError::NonAscii)));
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("cran ").is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("fiona").unwrap();
        assert_eq!(word.char_at(0), Some('f'));
        assert_eq!(word.char_at(4), Some('a'));
        assert_eq!(word.char_at(5), None);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("fiona").unwrap();
        assert!(word.has_letter('f'));
        assert!(word.has_letter('n'));
        assert!(!word.has_letter('z'));
        assert!(!word.has_letter('F'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("fiona").unwrap();
        assert_eq!(format!("{word}"), "fiona");
    }
}
