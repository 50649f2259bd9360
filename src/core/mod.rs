//! Core domain types for the daily puzzle
//!
//! Pure value types with no I/O: the secret word, the guess grid, and the
//! feedback colors derived from them.

mod board;
mod color;
mod word;

pub use board::{Board, BoardError, Cursor};
pub use color::{CellColor, LetterColors};
pub use word::{WORD_LENGTH, Word, WordError};
