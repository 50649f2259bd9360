//! A day's game wired to its persistence
//!
//! At startup the saved blob for the day is read once and either restored or
//! discarded before any key reaches the engine. After that, every key that
//! changes state is serialized and handed to the save writer.

use crate::engine::{GameEngine, Key, KeyOutcome};
use crate::store::{KeyValueStore, SaveWriter};
use crate::words::{DayIndex, WordProvider};
use tracing::{info, warn};

/// Build the engine for `day`, restoring the saved game if there is a usable one
///
/// Read failures and corrupt saves are logged and yield a fresh game.
pub fn load_engine<S, P>(store: &S, provider: &P, day: DayIndex, tries: usize) -> GameEngine
where
    S: KeyValueStore + ?Sized,
    P: WordProvider + ?Sized,
{
    let mut engine = GameEngine::for_day(provider, day.word_index(), tries);
    let key = day.storage_key();

    match store.get(&key) {
        Ok(Some(blob)) => {
            if engine.restore(&blob).is_ok() {
                info!(
                    key = %key,
                    rows = engine.committed_rows(),
                    status = ?engine.status(),
                    "resumed saved game"
                );
            }
        }
        Ok(None) => info!(key = %key, "no saved game, starting fresh"),
        Err(err) => warn!(%err, key = %key, "could not read saved game, starting fresh"),
    }

    engine
}

/// Interactive game for one day
pub struct Session {
    engine: GameEngine,
    day: DayIndex,
    storage_key: String,
    writer: SaveWriter,
}

impl Session {
    /// Load the day's game from `store`, then hand the store to a save writer
    pub fn start<S, P>(store: S, provider: &P, day: DayIndex, tries: usize) -> Self
    where
        S: KeyValueStore + 'static,
        P: WordProvider + ?Sized,
    {
        let engine = load_engine(&store, provider, day, tries);
        Self {
            engine,
            day,
            storage_key: day.storage_key(),
            writer: SaveWriter::spawn(store),
        }
    }

    /// Apply a key and persist the result if anything changed
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.engine.handle_key(key);
        if outcome.is_mutation() {
            self.save();
        }
        outcome
    }

    fn save(&self) {
        match self.engine.serialize() {
            Ok(blob) => self.writer.save(self.storage_key.as_str(), blob),
            Err(err) => warn!(%err, "could not encode game state"),
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub const fn day(&self) -> DayIndex {
        self.day
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        self.engine.share_text()
    }

    /// Flush pending saves and end the session
    pub fn close(self) {
        self.writer.close();
    }
}
