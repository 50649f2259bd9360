//! Display functions for the line-oriented game

use super::formatters::{KEYBOARD_ROWS, cell_tile, key_cap};
use crate::engine::{GameEngine, GameStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Render the board, one tile per cell
///
/// # Errors
/// Returns an I/O error if writing to `out` fails.
pub fn write_board(out: &mut impl Write, engine: &GameEngine) -> io::Result<()> {
    writeln!(out)?;
    for row in 0..engine.tries() {
        write!(out, "  ")?;
        for col in 0..engine.word_length() {
            let tile = cell_tile(
                engine.cell(row, col),
                engine.color_of(row, col),
                engine.is_active_cell(row, col),
            );
            write!(out, "{tile}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render the keyboard with each key colored by what is known about it
///
/// # Errors
/// Returns an I/O error if writing to `out` fails.
pub fn write_keyboard(out: &mut impl Write, engine: &GameEngine) -> io::Result<()> {
    let colors = engine.letter_color_sets();
    writeln!(out)?;
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        write!(out, "{}", " ".repeat(indent + 1))?;
        for letter in row.chars() {
            write!(out, "{}", key_cap(letter, colors.color_of(letter)))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Print the end-of-game notice
pub fn print_outcome(engine: &GameEngine) {
    match engine.status() {
        GameStatus::Won => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!(
                "{}",
                format!(
                    "🎉 Hurray, you won in {}/{}!",
                    engine.committed_rows(),
                    engine.tries()
                )
                .bright_green()
                .bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());
        }
        GameStatus::Lost => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!(
                "{}",
                format!(
                    "Unlucky! The word was {}. Try again tomorrow.",
                    engine.secret().text().to_uppercase()
                )
                .red()
                .bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());
        }
        GameStatus::Playing => {}
    }
}
