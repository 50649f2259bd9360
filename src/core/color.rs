//! Per-cell feedback colors
//!
//! Colors are never stored. They are a pure function of the guessed letter,
//! its column, and the secret word, recomputed whenever something asks.
//!
//! The rule is a simple position/contains check, not frequency-limited: a
//! letter guessed twice when the secret holds it once is `Present` (or
//! `Correct`) at both positions.

use super::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Feedback color for one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    /// Row not committed yet
    #[default]
    Unknown,
    /// Right letter, right position
    Correct,
    /// Letter appears elsewhere in the secret
    Present,
    /// Letter not in the secret
    Absent,
}

impl CellColor {
    /// Color a committed letter at `position` against `secret`
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{CellColor, Word};
    ///
    /// let secret = Word::new("fiona").unwrap();
    /// assert_eq!(CellColor::evaluate('f', 0, &secret), CellColor::Correct);
    /// assert_eq!(CellColor::evaluate('a', 0, &secret), CellColor::Present);
    /// assert_eq!(CellColor::evaluate('z', 0, &secret), CellColor::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(letter: char, position: usize, secret: &Word) -> Self {
        if secret.char_at(position) == Some(letter) {
            Self::Correct
        } else if secret.has_letter(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Priority used when a letter has been colored more than once
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Share-text glyph
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Unknown => '⬛',
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Letters typed so far, partitioned by the best color each has achieved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterColors {
    pub correct: FxHashSet<char>,
    pub present: FxHashSet<char>,
    pub absent: FxHashSet<char>,
}

impl LetterColors {
    /// Build from `(letter, color)` observations, keeping the highest rank per letter
    pub fn from_observations(observations: impl IntoIterator<Item = (char, CellColor)>) -> Self {
        let mut best: FxHashMap<char, CellColor> = FxHashMap::default();
        for (letter, color) in observations {
            let entry = best.entry(letter).or_default();
            if color.rank() > entry.rank() {
                *entry = color;
            }
        }

        let mut colors = Self::default();
        for (letter, color) in best {
            match color {
                CellColor::Correct => colors.correct.insert(letter),
                CellColor::Present => colors.present.insert(letter),
                CellColor::Absent => colors.absent.insert(letter),
                CellColor::Unknown => false,
            };
        }
        colors
    }

    /// Key-cap color for `letter`; `Unknown` if it has never been committed
    #[must_use]
    pub fn color_of(&self, letter: char) -> CellColor {
        let letter = letter.to_ascii_lowercase();
        if self.correct.contains(&letter) {
            CellColor::Correct
        } else if self.present.contains(&letter) {
            CellColor::Present
        } else if self.absent.contains(&letter) {
            CellColor::Absent
        } else {
            CellColor::Unknown
        }
    }
}
