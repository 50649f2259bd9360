//! Formatting utilities for terminal output

use crate::core::CellColor;
use crate::engine::{GameEngine, GameStatus};
use crate::words::DayIndex;
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Score shown in the share header: guesses used, `X` for a loss, `-` mid-game
#[must_use]
pub fn score_label(engine: &GameEngine) -> String {
    match engine.status() {
        GameStatus::Won => engine.committed_rows().to_string(),
        GameStatus::Lost => "X".to_string(),
        GameStatus::Playing => "-".to_string(),
    }
}

/// Share text with a title line
///
/// ```text
/// Wordle 291 3/6
/// ⬜🟨⬜⬜⬜
/// 🟨🟩⬜🟨⬜
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_message(day: DayIndex, engine: &GameEngine) -> String {
    format!(
        "Wordle {} {}/{}\n{}",
        day.ordinal(),
        score_label(engine),
        engine.tries(),
        engine.share_text()
    )
}

/// One board cell as a padded, colored tile
#[must_use]
pub fn cell_tile(letter: Option<char>, color: CellColor, active: bool) -> ColoredString {
    let text = match (letter, active) {
        (Some(ch), _) => format!(" {} ", ch.to_ascii_uppercase()),
        (None, true) => "[_]".to_string(),
        (None, false) => " · ".to_string(),
    };
    paint(text, color)
}

/// One keyboard key, colored by the best color its letter has reached
#[must_use]
pub fn key_cap(letter: char, color: CellColor) -> ColoredString {
    paint(format!(" {} ", letter.to_ascii_uppercase()), color)
}

fn paint(text: String, color: CellColor) -> ColoredString {
    match color {
        CellColor::Correct => text.black().on_green().bold(),
        CellColor::Present => text.black().on_yellow().bold(),
        CellColor::Absent => text.white().on_bright_black(),
        CellColor::Unknown => text.bright_white(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::Key;
    use chrono::NaiveDate;

    fn play(guesses: &[&str]) -> GameEngine {
        let mut engine = GameEngine::new(Word::new("fiona").unwrap(), 6);
        for guess in guesses {
            for ch in guess.chars() {
                engine.handle_key(Key::Letter(ch));
            }
            engine.handle_key(Key::Enter);
        }
        engine
    }

    fn day() -> DayIndex {
        DayIndex::from_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
    }

    #[test]
    fn share_message_for_win() {
        let engine = play(&["nafio", "fiona"]);
        assert_eq!(
            share_message(day(), &engine),
            "Wordle 32 2/6\n🟨🟨🟨🟨🟨\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_message_for_loss() {
        let engine = play(&["xxxxx"; 6]);
        let message = share_message(day(), &engine);
        assert!(message.starts_with("Wordle 32 X/6\n"));
        assert_eq!(message.lines().count(), 7);
    }

    #[test]
    fn share_message_mid_game() {
        let engine = play(&["crane"]);
        assert_eq!(
            share_message(day(), &engine),
            "Wordle 32 -/6\n⬜⬜🟨🟩⬜"
        );
    }

    #[test]
    fn tiles_show_uppercase_letters() {
        colored::control::set_override(false);
        assert_eq!(cell_tile(Some('f'), CellColor::Correct, false).to_string(), " F ");
        assert_eq!(cell_tile(None, CellColor::Unknown, true).to_string(), "[_]");
        assert_eq!(key_cap('q', CellColor::Absent).to_string(), " Q ");
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }
}
