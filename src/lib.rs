//! Daily Wordle
//!
//! A daily word-guessing game: one secret word per calendar day, a fixed
//! number of tries, colored feedback after every guess, and progress that
//! survives restarts.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use daily_wordle::core::Word;
//! use daily_wordle::engine::{GameEngine, GameStatus, Key};
//!
//! let mut engine = GameEngine::new(Word::new("fiona").unwrap(), 6);
//! for ch in "fiona".chars() {
//!     engine.handle_key(Key::Letter(ch));
//! }
//! engine.handle_key(Key::Enter);
//!
//! assert_eq!(engine.status(), GameStatus::Won);
//! println!("{}", engine.share_text());
//! ```

// Core domain types
pub mod core;

// Game state machine and its saved form
pub mod engine;

// Secret word selection
pub mod words;

// Saved-game persistence
pub mod store;

// A day's game wired to its store
pub mod session;

// Runtime configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
