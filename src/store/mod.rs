//! Key-value persistence for saved games
//!
//! The engine only produces and consumes strings; where they live is up to a
//! `KeyValueStore`. Writes go through a `SaveWriter` so a slow or failing disk
//! never holds up a key press.

mod file;
mod memory;
mod writer;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use writer::SaveWriter;

use thiserror::Error;

/// Errors surfaced by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// String key-value storage
pub trait KeyValueStore: Send {
    /// Read a value; `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}
