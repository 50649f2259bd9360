//! TUI application state and logic

use crate::engine::{GameStatus, Key, KeyOutcome};
use crate::output::share_message;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Share text requested by the player, printed once the terminal is restored
    pub shared: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
            shared: None,
        };

        match app.session.engine().status() {
            GameStatus::Playing => app.add_message(
                &format!(
                    "Guess the word in {} tries. Type letters, Enter to submit.",
                    app.session.engine().tries()
                ),
                MessageStyle::Info,
            ),
            status => {
                app.announce(status);
                app.add_message("You already played today.", MessageStyle::Info);
            }
        }

        app
    }

    /// Apply one terminal key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.engine().status().is_over() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('s') | KeyCode::Enter => self.share(),
                _ => {}
            },
            KeyCode::Char(c) => {
                self.press(Key::Letter(c));
            }
            KeyCode::Backspace => {
                self.press(Key::Clear);
            }
            KeyCode::Enter => {
                if self.press(Key::Enter) == KeyOutcome::Ignored {
                    self.add_message("Not enough letters", MessageStyle::Error);
                }
            }
            _ => {}
        }
    }

    fn press(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.session.handle_key(key);
        if let KeyOutcome::Finished(status) = outcome {
            self.announce(status);
        }
        outcome
    }

    fn announce(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won => {
                self.add_message("🎉 Hurray, you won!", MessageStyle::Success);
            }
            GameStatus::Lost => {
                let word = self.session.engine().secret().text().to_uppercase();
                self.add_message(
                    &format!("Unlucky, the word was {word}. Try again tomorrow"),
                    MessageStyle::Error,
                );
            }
            GameStatus::Playing => return,
        }
        self.add_message("Press 's' to share or 'q' to quit.", MessageStyle::Info);
    }

    /// Prepare today's share message
    pub fn share(&mut self) {
        self.shared = Some(share_message(self.session.day(), self.session.engine()));
        self.add_message(
            "Result ready, it will be printed when you quit.",
            MessageStyle::Success,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Flush the session and hand back the share text, if one was requested
    #[must_use]
    pub fn finish(self) -> Option<String> {
        self.session.close();
        self.shared
    }
}

/// Run the TUI application
///
/// Returns the share text the player asked for, if any.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<Option<String>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let shared = app.finish();
    res?;
    Ok(shared)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
