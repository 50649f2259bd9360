//! Guess grid
//!
//! The board is a `tries × width` grid of optional lowercase letters. It is owned
//! by exactly one engine; snapshots copy it out rather than sharing rows.

use std::fmt;

/// Next writable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Fixed-size grid of guessed letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    cells: Vec<Vec<Option<char>>>,
}

/// Reasons a serialized grid cannot become a Board
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) holds {value:?}, expected a single letter or nothing")]
    InvalidCell {
        row: usize,
        col: usize,
        value: String,
    },
}

impl Board {
    /// Create an all-empty board
    #[must_use]
    pub fn new(tries: usize, width: usize) -> Self {
        Self {
            width,
            cells: vec![vec![None; width]; tries],
        }
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn tries(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Letter at `(row, col)`; `None` for empty or out-of-range cells
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Write a cell, returning `false` if `(row, col)` is out of range
    pub fn set(&mut self, row: usize, col: usize, value: Option<char>) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Cells of one row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Option<char>]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// The row's letters as a string, if every cell is filled
    #[must_use]
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.row(row)?.iter().copied().collect()
    }

    /// Iterate rows in chronological order
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Grid as nested strings: `""` for empty, one lowercase letter otherwise
    #[must_use]
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Rebuild a board from nested strings, checking its dimensions
    ///
    /// Letters are normalized to lowercase.
    ///
    /// # Errors
    /// Returns `BoardError` if the grid is not `tries × width` or a cell holds
    /// anything other than nothing or one ASCII letter.
    pub fn from_strings(
        rows: &[Vec<String>],
        tries: usize,
        width: usize,
    ) -> Result<Self, BoardError> {
        if rows.len() != tries {
            return Err(BoardError::RowCount {
                expected: tries,
                found: rows.len(),
            });
        }

        let mut board = Self::new(tries, width);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::RowWidth {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }

            for (c, value) in row.iter().enumerate() {
                let mut chars = value.chars();
                let cell = match (chars.next(), chars.next()) {
                    (None, _) => None,
                    (Some(ch), None) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_lowercase()),
                    _ => {
                        return Err(BoardError::InvalidCell {
                            row: r,
                            col: c,
                            value: value.clone(),
                        });
                    }
                };
                board.cells[r][c] = cell;
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell.map_or('.', |c| c.to_ascii_uppercase()))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6, 5);
        assert_eq!(board.tries(), 6);
        assert_eq!(board.width(), 5);
        assert!(board.rows().all(|row| row.iter().all(Option::is_none)));
    }

    #[test]
    fn set_and_get() {
        let mut board = Board::new(6, 5);
        assert!(board.set(0, 2, Some('o')));
        assert_eq!(board.get(0, 2), Some('o'));
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut board = Board::new(6, 5);
        assert!(!board.set(6, 0, Some('a')));
        assert!(!board.set(0, 5, Some('a')));
        assert_eq!(board.get(6, 0), None);
        assert!(board.row(6).is_none());
    }

    #[test]
    fn row_text_requires_full_row() {
        let mut board = Board::new(2, 3);
        board.set(0, 0, Some('c'));
        board.set(0, 1, Some('a'));
        assert_eq!(board.row_text(0), None);

        board.set(0, 2, Some('t'));
        assert_eq!(board.row_text(0).as_deref(), Some("cat"));
    }

    #[test]
    fn strings_round_trip() {
        let mut board = Board::new(2, 3);
        board.set(0, 0, Some('c'));
        board.set(1, 2, Some('z'));

        let strings = board.to_strings();
        assert_eq!(strings[0], vec!["c", "", ""]);
        assert_eq!(Board::from_strings(&strings, 2, 3).unwrap(), board);
    }

    #[test]
    fn from_strings_normalizes_case() {
        let rows = vec![vec!["A".to_string(), String::new()]];
        let board = Board::from_strings(&rows, 1, 2).unwrap();
        assert_eq!(board.get(0, 0), Some('a'));
    }

    #[test]
    fn from_strings_rejects_bad_shapes() {
        let rows = vec![vec![String::new(); 5]; 5];
        assert_eq!(
            Board::from_strings(&rows, 6, 5),
            Err(BoardError::RowCount {
                expected: 6,
                found: 5
            })
        );

        let rows = vec![vec![String::new(); 4]; 6];
        assert!(matches!(
            Board::from_strings(&rows, 6, 5),
            Err(BoardError::RowWidth { row: 0, .. })
        ));
    }

    #[test]
    fn from_strings_rejects_bad_cells() {
        let mut rows = vec![vec![String::new(); 2]; 1];
        rows[0][1] = "ab".to_string();
        assert!(matches!(
            Board::from_strings(&rows, 1, 2),
            Err(BoardError::InvalidCell { row: 0, col: 1, .. })
        ));

        rows[0][1] = "7".to_string();
        assert!(Board::from_strings(&rows, 1, 2).is_err());
    }

    #[test]
    fn display_uses_uppercase_and_dots() {
        let mut board = Board::new(1, 3);
        board.set(0, 0, Some('c'));
        assert_eq!(board.to_string(), "C..\n");
    }
}
