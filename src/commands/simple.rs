//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole guess and press Enter.

use crate::engine::{Key, KeyOutcome};
use crate::output::{ShareSink, print_outcome, share_message, write_board, write_keyboard};
use crate::session::Session;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Run the line-oriented game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing to the terminal fails.
pub fn run_simple<R: BufRead>(
    mut session: Session,
    mut input: R,
    sink: &mut dyn ShareSink,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║          Daily Wordle - Simple Mode        ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries.",
        session.engine().word_length(),
        session.engine().tries()
    );
    println!("Commands: 'share' to share your result, 'quit' to exit");

    clear_partial_row(&mut session);
    show(&session)?;
    print_outcome(session.engine());

    loop {
        let prompt = if session.engine().status().is_over() {
            "Command (share/quit)"
        } else {
            "Guess"
        };

        let Some(line) = get_user_input(&mut input, prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "share" | "s" => sink.emit(&share_message(session.day(), session.engine())),
            "" => {}
            _ if session.engine().status().is_over() => {
                println!("Today's game is over. Come back tomorrow!");
            }
            guess => {
                let outcome = submit_guess(&mut session, guess);
                show(&session)?;
                if let Some(KeyOutcome::Finished(_)) = outcome {
                    print_outcome(session.engine());
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    session.close();
    Ok(())
}

/// Type a whole guess and submit it; `None` if the guess was rejected up front
fn submit_guess(session: &mut Session, guess: &str) -> Option<KeyOutcome> {
    let width = session.engine().word_length();
    if guess.chars().count() != width || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("❌ Guess must be exactly {width} letters");
        return None;
    }

    for ch in guess.chars() {
        session.handle_key(Key::Letter(ch));
    }
    Some(session.handle_key(Key::Enter))
}

/// Drop letters left in the current row by an earlier TUI session
fn clear_partial_row(session: &mut Session) {
    while session.engine().cursor().col > 0 {
        if session.handle_key(Key::Clear) == KeyOutcome::Ignored {
            break;
        }
    }
}

fn show(session: &Session) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_board(&mut stdout, session.engine())?;
    if !session.engine().status().is_over() {
        write_keyboard(&mut stdout, session.engine())?;
    }
    stdout.flush()
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::GameStatus;
    use crate::output::BufferSink;
    use crate::session::load_engine;
    use crate::store::MemoryStore;
    use crate::words::{DayIndex, WordProvider};
    use chrono::NaiveDate;
    use std::io::Cursor;

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
    fn plays_to_a_win_and_shares() {
        let store = MemoryStore::new();
        let session = Session::start(store.clone(), &Fiona, day(), 6);
        let mut sink = BufferSink::default();

        let input = Cursor::new("nafio\nabc\nfionas\nFIONA\nagain\nshare\nquit\n");
        run_simple(session, input, &mut sink).unwrap();

        assert_eq!(
            sink.shared,
            ["Wordle 32 2/6\n🟨🟨🟨🟨🟨\n🟩🟩🟩🟩🟩"]
        );
        let engine = load_engine(&store, &Fiona, day(), 6);
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.committed_rows(), 2);
    }

    #[test]
    fn clears_leftover_letters_before_playing() {
        let store = MemoryStore::new();
        let mut session = Session::start(store.clone(), &Fiona, day(), 6);
        session.handle_key(Key::Letter('x'));
        session.handle_key(Key::Letter('y'));
        session.close();

        let session = Session::start(store.clone(), &Fiona, day(), 6);
        let mut sink = BufferSink::default();
        run_simple(session, Cursor::new("crane\n"), &mut sink).unwrap();

        let engine = load_engine(&store, &Fiona, day(), 6);
        assert_eq!(engine.board().row_text(0).as_deref(), Some("crane"));
        assert!(sink.shared.is_empty());
    }
}
