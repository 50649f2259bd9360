//! Calendar day to puzzle index
//!
//! A puzzle day is identified by its year and day-of-year. The word index
//! steps by three per day, and each day gets its own storage key so a game left
//! unfinished yesterday is never restored against today's secret.

use chrono::{Datelike, Local, NaiveDate};

/// Word-index step between consecutive days
pub const DAY_STRIDE: u32 = 3;

/// One calendar day of puzzles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayIndex {
    year: i32,
    ordinal: u32,
}

impl DayIndex {
    /// The local calendar day right now
    #[must_use]
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            ordinal: date.ordinal(),
        }
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Day of the year, starting at 1
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self.ordinal
    }

    /// Index handed to the word provider
    #[must_use]
    pub const fn word_index(self) -> u32 {
        self.ordinal * DAY_STRIDE
    }

    /// Key the day's game is saved under
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use daily_wordle::words::DayIndex;
    ///
    /// let day = DayIndex::from_date(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
    /// assert_eq!(day.storage_key(), "day-6-2026");
    /// ```
    #[must_use]
    pub fn storage_key(self) -> String {
        format!("day-{}-{}", self.word_index(), self.year)
    }
}
