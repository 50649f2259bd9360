//! Forget the saved game for a day

use crate::store::{self, KeyValueStore};
use crate::words::DayIndex;
use tracing::info;

/// Remove the saved game for `day`; returns whether one existed
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn reset_day<S: KeyValueStore + ?Sized>(store: &mut S, day: DayIndex) -> store::Result<bool> {
    let key = day.storage_key();
    let existed = store.get(&key)?.is_some();
    store.remove(&key)?;
    info!(key = %key, existed, "reset saved game");
    Ok(existed)
}
