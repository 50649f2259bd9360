//! Share today's result without opening a game

use crate::output::share_message;
use crate::session::load_engine;
use crate::store::KeyValueStore;
use crate::words::{DayIndex, WordProvider};

/// Share message for the saved game of `day`, if any guess has been committed
#[must_use]
pub fn saved_share_message<S, P>(
    store: &S,
    provider: &P,
    day: DayIndex,
    tries: usize,
) -> Option<String>
where
    S: KeyValueStore + ?Sized,
    P: WordProvider + ?Sized,
{
    let engine = load_engine(store, provider, day, tries);
    (engine.committed_rows() > 0).then(|| share_message(day, &engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::{GameEngine, Key};
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    struct Fiona;

    impl WordProvider for Fiona {
        fn word_for_day(&self, _day: u32) -> Word {
            Word::new("fiona").unwrap()
        }
    }

    fn day() -> DayIndex {
        DayIndex::from_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
    }

    #[test]
    fn nothing_to_share_without_a_guess() {
        let mut store = MemoryStore::new();
        assert_eq!(saved_share_message(&store, &Fiona, day(), 6), None);

        let mut engine = GameEngine::for_day(&Fiona, day().word_index(), 6);
        engine.handle_key(Key::Letter('f'));
        store
            .set(&day().storage_key(), &engine.serialize().unwrap())
            .unwrap();
        assert_eq!(saved_share_message(&store, &Fiona, day(), 6), None);
    }

    #[test]
    fn shares_saved_rows() {
        let mut store = MemoryStore::new();
        let mut engine = GameEngine::for_day(&Fiona, day().word_index(), 6);
        for ch in "crane".chars() {
            engine.handle_key(Key::Letter(ch));
        }
        engine.handle_key(Key::Enter);
        store
            .set(&day().storage_key(), &engine.serialize().unwrap())
            .unwrap();

        assert_eq!(
            saved_share_message(&store, &Fiona, day(), 6).as_deref(),
            Some("Wordle 32 -/6\n⬜⬜🟨🟩⬜")
        );
    }
}
