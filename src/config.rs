//! Runtime configuration
//!
//! Every setting can come from a command-line flag or an environment variable;
//! anything left unset falls back to a platform default.

use crate::engine::DEFAULT_TRIES;
use crate::store::{self, FileStore};
use crate::words::{DayIndex, WordList, WordListError};
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

/// Application name used for platform directories
pub const APP_NAME: &str = "daily_wordle";

/// Largest board the terminal UI can lay out
pub const MAX_TRIES: usize = 12;

/// Settings shared by every subcommand
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Number of guesses per game
    #[arg(short, long, env = "WORDLE_TRIES", global = true, default_value_t = DEFAULT_TRIES, value_parser = parse_tries)]
    pub tries: usize,

    /// Play the puzzle for this date (YYYY-MM-DD) instead of today
    #[arg(short, long, env = "WORDLE_DATE", global = true)]
    pub date: Option<NaiveDate>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short, long, env = "WORDLE_WORDS", global = true)]
    pub words: Option<PathBuf>,

    /// Directory saved games are kept in
    #[arg(long, env = "WORDLE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory log files are written to
    #[arg(long, env = "WORDLE_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

fn parse_tries(s: &str) -> Result<usize, String> {
    let tries: usize = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (1..=MAX_TRIES).contains(&tries) {
        Ok(tries)
    } else {
        Err(format!("tries must be between 1 and {MAX_TRIES}"))
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub tries: usize,
    pub day: DayIndex,
    pub words: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    /// Fill in defaults for anything not given
    #[must_use]
    pub fn from_args(args: ConfigArgs) -> Self {
        Self {
            tries: args.tries,
            day: args.date.map_or_else(DayIndex::today, DayIndex::from_date),
            words: args.words,
            data_dir: args.data_dir.unwrap_or_else(default_data_dir),
            log_dir: args.log_dir.unwrap_or_else(default_log_dir),
        }
    }

    /// The configured word provider
    ///
    /// # Errors
    /// Returns `WordListError` if the word file cannot be read or holds no
    /// valid words.
    pub fn word_list(&self) -> Result<WordList, WordListError> {
        match &self.words {
            Some(path) => WordList::from_file(path),
            None => WordList::embedded(),
        }
    }

    /// Open the saved-game store
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the data directory cannot be created.
    pub fn open_store(&self) -> store::Result<FileStore> {
        FileStore::new(&self.data_dir)
    }
}

/// Platform data directory
///
/// - macOS: `~/Library/Application Support/daily_wordle`
/// - Linux: `~/.local/share/daily_wordle` (or `$XDG_DATA_HOME/daily_wordle`)
/// - Windows: `%APPDATA%\daily_wordle`
/// - Fallback: `./save_data`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map_or_else(|| PathBuf::from("./save_data"), |dirs| dirs.data_dir().to_path_buf())
}

/// Platform log directory
///
/// - macOS: `~/Library/Caches/daily_wordle/logs`
/// - Linux: `~/.cache/daily_wordle/logs` (or `$XDG_CACHE_HOME/daily_wordle/logs`)
/// - Windows: `%LOCALAPPDATA%\daily_wordle\logs`
/// - Fallback: `<temp dir>/daily_wordle/logs`
#[must_use]
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map_or_else(
            || std::env::temp_dir().join(APP_NAME),
            |dirs| dirs.cache_dir().to_path_buf(),
        )
        .join("logs")
}
