//! Game state machine
//!
//! `GameEngine` owns the board, the cursor, and the game status. Key events
//! move it forward; everything the UI draws (cell letters, colors, key-cap
//! highlights, the share grid) is a pure query over that state.
//!
//! ```text
//! Playing ──correct guess──▶ Won
//!    │
//!    └──last row missed────▶ Lost
//! ```
//!
//! Invalid input (typing into a full row, clearing an empty one, submitting a
//! partial guess) is not an error: it is ignored and reported as
//! `KeyOutcome::Ignored`.

mod snapshot;

pub use snapshot::PersistedState;

use crate::core::{Board, CellColor, Cursor, LetterColors, Word};
use crate::words::WordProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Default number of guesses per game
pub const DEFAULT_TRIES: usize = 6;

/// Game progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Input event from the keyboard widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Clear,
    Enter,
}

/// What a key event did to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed
    Ignored,
    /// Board or cursor changed, game still in progress
    Updated,
    /// A row was committed and ended the game
    Finished(GameStatus),
}

impl KeyOutcome {
    /// Whether state changed and must be persisted
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Engine errors
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("persisted state is corrupt: {0}")]
    StateCorrupt(String),

    #[error("board exhausted: row {row} is past the last of {tries} tries")]
    BoardExhausted { row: usize, tries: usize },

    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The puzzle for one session
#[derive(Debug, Clone)]
pub struct GameEngine {
    secret: Word,
    day: Option<u32>,
    board: Board,
    cursor: Cursor,
    status: GameStatus,
}

impl GameEngine {
    /// Create a fresh game for `secret` with `tries` rows
    ///
    /// A `tries` of zero is raised to one.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    /// use daily_wordle::engine::{GameEngine, GameStatus, Key};
    ///
    /// let mut engine = GameEngine::new(Word::new("fiona").unwrap(), 6);
    /// for ch in "fiona".chars() {
    ///     engine.handle_key(Key::Letter(ch));
    /// }
    /// engine.handle_key(Key::Enter);
    /// assert_eq!(engine.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn new(secret: Word, tries: usize) -> Self {
        let board = Board::new(tries.max(1), secret.len());
        Self {
            secret,
            day: None,
            board,
            cursor: Cursor::default(),
            status: GameStatus::Playing,
        }
    }

    /// Create a fresh game for `day`, asking `provider` for the secret
    #[must_use]
    pub fn for_day<P: WordProvider + ?Sized>(provider: &P, day: u32, tries: usize) -> Self {
        let mut engine = Self::new(provider.word_for_day(day), tries);
        engine.day = Some(day);
        engine
    }

    fn reset(&mut self) {
        self.board = Board::new(self.board.tries(), self.board.width());
        self.cursor = Cursor::default();
        self.status = GameStatus::Playing;
    }

    /// Route a key event to the matching operation
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Letter(ch) => self.submit_letter(ch),
            Key::Clear => self.clear_letter(),
            Key::Enter => self.submit_row(),
        }
    }

    /// Write a letter at the cursor and advance it
    ///
    /// Ignored once the game is over, when the row is full, or for anything
    /// other than an ASCII letter.
    pub fn submit_letter(&mut self, ch: char) -> KeyOutcome {
        if self.status.is_over() || self.cursor.col >= self.board.width() {
            return KeyOutcome::Ignored;
        }
        if !ch.is_ascii_alphabetic() || self.board_exhausted() {
            return KeyOutcome::Ignored;
        }

        self.board
            .set(self.cursor.row, self.cursor.col, Some(ch.to_ascii_lowercase()));
        self.cursor.col += 1;
        KeyOutcome::Updated
    }

    /// Step the cursor back and clear that cell
    pub fn clear_letter(&mut self) -> KeyOutcome {
        if self.status.is_over() || self.cursor.col == 0 || self.board_exhausted() {
            return KeyOutcome::Ignored;
        }

        self.cursor.col -= 1;
        self.board.set(self.cursor.row, self.cursor.col, None);
        KeyOutcome::Updated
    }

    /// Commit the current row if it is full, then check for a win or loss
    ///
    /// Words are not checked against a dictionary.
    pub fn submit_row(&mut self) -> KeyOutcome {
        if self.status.is_over() || self.cursor.col != self.board.width() {
            return KeyOutcome::Ignored;
        }
        if self.board_exhausted() {
            return KeyOutcome::Ignored;
        }

        self.cursor.row += 1;
        self.cursor.col = 0;
        self.evaluate_end()
    }

    fn evaluate_end(&mut self) -> KeyOutcome {
        self.status = settled_status(&self.board, &self.secret, self.cursor.row);
        if self.status == GameStatus::Playing {
            return KeyOutcome::Updated;
        }

        info!(status = ?self.status, rows = self.cursor.row, "game finished");
        KeyOutcome::Finished(self.status)
    }

    /// Guard against writing past the last row
    ///
    /// Status transitions make this unreachable; it panics in debug builds and
    /// is logged and ignored in release builds.
    fn board_exhausted(&self) -> bool {
        if self.cursor.row < self.board.tries() {
            return false;
        }

        let err = EngineError::BoardExhausted {
            row: self.cursor.row,
            tries: self.board.tries(),
        };
        error!(%err, "rejected write past the last row");
        if cfg!(debug_assertions) {
            panic!("{err}");
        }
        true
    }

    /// Feedback color of a cell; `Unknown` for rows not yet committed
    #[must_use]
    pub fn color_of(&self, row: usize, col: usize) -> CellColor {
        if row >= self.cursor.row {
            return CellColor::Unknown;
        }

        self.board
            .get(row, col)
            .map_or(CellColor::Unknown, |letter| {
                CellColor::evaluate(letter, col, &self.secret)
            })
    }

    /// Every committed letter, grouped by the best color it has reached
    #[must_use]
    pub fn letter_color_sets(&self) -> LetterColors {
        let width = self.board.width();
        LetterColors::from_observations((0..self.cursor.row).flat_map(|row| {
            (0..width).filter_map(move |col| {
                self.board
                    .get(row, col)
                    .map(|letter| (letter, self.color_of(row, col)))
            })
        }))
    }

    /// One line of color glyphs per committed row
    ///
    /// Uncommitted rows are left out entirely, so the line count equals
    /// `committed_rows()`.
    #[must_use]
    pub fn share_text(&self) -> String {
        (0..self.cursor.row)
            .map(|row| {
                (0..self.board.width())
                    .map(|col| self.color_of(row, col).glyph())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Lowercase letter in a cell
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.board.get(row, col)
    }

    /// Uppercase letter in a cell, for display
    #[must_use]
    pub fn display_letter(&self, row: usize, col: usize) -> Option<char> {
        self.cell(row, col).map(|c| c.to_ascii_uppercase())
    }

    /// Whether `(row, col)` is the next writable cell
    #[must_use]
    pub fn is_active_cell(&self, row: usize, col: usize) -> bool {
        row == self.cursor.row && col == self.cursor.col
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Number of committed rows
    #[must_use]
    pub const fn committed_rows(&self) -> usize {
        self.cursor.row
    }

    #[must_use]
    pub fn tries(&self) -> usize {
        self.board.tries()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.board.width()
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn day(&self) -> Option<u32> {
        self.day
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Copy the full state out for persistence
    #[must_use]
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            board: self.board.to_strings(),
            current_row: self.cursor.row,
            current_col: self.cursor.col,
            game_status: self.status,
            day: self.day,
        }
    }

    /// Snapshot encoded as JSON
    ///
    /// # Errors
    /// Returns `EngineError::Encode` if serialization fails.
    pub fn serialize(&self) -> Result<String, EngineError> {
        self.snapshot().encode()
    }

    /// Replace board, cursor, and status with a persisted snapshot
    ///
    /// The secret word is not revalidated. On any failure the engine is reset
    /// to a fresh game and the error is logged before being returned.
    ///
    /// # Errors
    /// Returns `EngineError::StateCorrupt` if the blob cannot be parsed or does
    /// not describe a reachable state of this engine.
    pub fn restore(&mut self, blob: &str) -> Result<(), EngineError> {
        let restored = PersistedState::decode(blob).and_then(|state| {
            let board = self.validate(&state)?;
            Ok((state, board))
        });

        match restored {
            Ok((state, board)) => {
                self.board = board;
                self.cursor = Cursor {
                    row: state.current_row,
                    col: state.current_col,
                };
                self.status = state.game_status;
                debug!(cursor = ?self.cursor, status = ?self.status, "restored saved game");
                Ok(())
            }
            Err(err) => {
                warn!(%err, "discarding saved game and starting fresh");
                self.reset();
                Err(err)
            }
        }
    }

    fn validate(&self, state: &PersistedState) -> Result<Board, EngineError> {
        let corrupt = EngineError::StateCorrupt;

        if state.day != self.day {
            return Err(corrupt(format!(
                "saved for day {:?}, current day is {:?}",
                state.day, self.day
            )));
        }

        let tries = self.board.tries();
        let width = self.board.width();
        let board = Board::from_strings(&state.board, tries, width)
            .map_err(|e| corrupt(e.to_string()))?;

        let cursor = Cursor {
            row: state.current_row,
            col: state.current_col,
        };
        if cursor.row > tries || cursor.col > width || (cursor.row == tries && cursor.col != 0) {
            return Err(corrupt(format!(
                "cursor ({}, {}) outside a {tries}x{width} board",
                cursor.row, cursor.col
            )));
        }

        for (r, row) in board.rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let written = r < cursor.row || (r == cursor.row && c < cursor.col);
                if cell.is_some() != written {
                    return Err(corrupt(format!(
                        "cell ({r}, {c}) does not match cursor ({}, {})",
                        cursor.row, cursor.col
                    )));
                }
            }
        }

        let expected = settled_status(&board, &self.secret, cursor.row);
        if state.game_status != expected {
            return Err(corrupt(format!(
                "status {:?} does not match the board, expected {expected:?}",
                state.game_status
            )));
        }
        if expected.is_over() && cursor.col != 0 {
            return Err(corrupt(format!(
                "{expected:?} game has letters past its last guess"
            )));
        }

        Ok(board)
    }
}

/// Status implied by the first `committed` rows of `board`
///
/// Win is checked before exhaustion: a correct last guess is a win.
fn settled_status(board: &Board, secret: &Word, committed: usize) -> GameStatus {
    let guessed = committed
        .checked_sub(1)
        .and_then(|last| board.row_text(last))
        .is_some_and(|guess| guess == secret.text());

    if guessed {
        GameStatus::Won
    } else if committed >= board.tries() {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}
