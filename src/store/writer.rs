//! Background save writer.
//!
//! Saves are handed to a dedicated thread over a channel and the caller returns
//! immediately. When several saves for the same key queue up, only the newest
//! is written. Closing (or dropping) the writer flushes whatever is queued.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use rustc_hash::FxHashMap;
use tracing::{debug, error, warn};

use super::KeyValueStore;

struct SaveRequest {
    key: String,
    value: String,
}

/// Fire-and-forget writer owning a store
pub struct SaveWriter {
    sender: Option<Sender<SaveRequest>>,
    handle: Option<JoinHandle<()>>,
}

impl SaveWriter {
    /// Move `store` onto a writer thread
    ///
    /// If the thread cannot be started the failure is logged and later saves
    /// are dropped; gameplay carries on unsaved.
    pub fn spawn<S: KeyValueStore + 'static>(store: S) -> Self {
        let (sender, receiver) = mpsc::channel();

        match thread::Builder::new()
            .name("save-writer".to_string())
            .spawn(move || run(store, &receiver))
        {
            Ok(handle) => Self {
                sender: Some(sender),
                handle: Some(handle),
            },
            Err(err) => {
                error!(%err, "failed to start save writer; progress will not be saved");
                Self {
                    sender: None,
                    handle: None,
                }
            }
        }
    }

    /// Queue a save without waiting for it
    pub fn save(&self, key: impl Into<String>, value: String) {
        let Some(sender) = &self.sender else {
            warn!("save writer unavailable, dropping save");
            return;
        };

        let request = SaveRequest {
            key: key.into(),
            value,
        };
        if sender.send(request).is_err() {
            warn!("save writer stopped, dropping save");
        }
    }

    /// Flush queued saves and stop the thread
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender ends the writer loop once the queue drains.
        self.sender.take();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            error!("save writer thread panicked");
        }
    }
}

impl Drop for SaveWriter {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run<S: KeyValueStore>(mut store: S, receiver: &Receiver<SaveRequest>) {
    while let Ok(first) = receiver.recv() {
        let mut pending: FxHashMap<String, String> = FxHashMap::default();
        pending.insert(first.key, first.value);
        while let Ok(next) = receiver.try_recv() {
            pending.insert(next.key, next.value);
        }

        for (key, value) in pending {
            match store.set(&key, &value) {
                Ok(()) => debug!(key = %key, bytes = value.len(), "saved game"),
                Err(err) => warn!(%err, key = %key, "failed to save game"),
            }
        }
    }
    debug!("save writer stopped");
}
