//! TUI rendering with ratatui
//!
//! Board, keyboard and messages for the daily game.

use super::app::{App, MessageStyle};
use crate::core::CellColor;
use crate::engine::{GameEngine, GameStatus};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let engine = app.session.engine();
    let board_height = u16::try_from(engine.tries()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                             // Header
            Constraint::Length(board_height.saturating_add(2)), // Board
            Constraint::Length(5),                             // Keyboard
            Constraint::Min(3),                                // Messages
            Constraint::Length(1),                             // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, engine, chunks[1]);
    render_keyboard(f, engine, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, engine, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("DAILY WORDLE #{}", app.session.day().ordinal()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background/foreground pair for a tile or key
fn color_style(color: CellColor) -> Style {
    match color {
        CellColor::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellColor::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellColor::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellColor::Unknown => Style::default().fg(Color::White),
    }
}

fn render_board(f: &mut Frame, engine: &GameEngine, area: Rect) {
    let lines: Vec<Line> = (0..engine.tries())
        .map(|row| {
            let spans: Vec<Span> = (0..engine.word_length())
                .flat_map(|col| {
                    let (text, style) = match engine.display_letter(row, col) {
                        Some(ch) => (
                            format!(" {} ", ch.to_ascii_uppercase()),
                            color_style(engine.color_of(row, col)),
                        ),
                        None if engine.is_active_cell(row, col) => (
                            "[_]".to_string(),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        None => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
                    };
                    [Span::styled(text, style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, engine: &GameEngine, area: Rect) {
    let colors = engine.letter_color_sets();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|letter| {
                        Span::styled(
                            format!(" {} ", letter.to_ascii_uppercase()),
                            color_style(colors.color_of(letter)),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, engine: &GameEngine, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let progress = match engine.status() {
        GameStatus::Playing => format!(
            "Guess {}/{}",
            engine.committed_rows() + 1,
            engine.tries()
        ),
        GameStatus::Won => format!("Solved in {}/{}", engine.committed_rows(), engine.tries()),
        GameStatus::Lost => format!("X/{}", engine.tries()),
    };
    f.render_widget(
        Paragraph::new(progress).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if engine.status().is_over() {
        "s/Enter: Share | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::Session;
    use crate::store::MemoryStore;
    use crate::words::{DayIndex, WordProvider};
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    struct Fiona;

    impl WordProvider for Fiona {
        fn word_for_day(&self, _day: u32) -> Word {
            Word::new("fiona").unwrap()
        }
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_board_keyboard_and_status() {
        let day = DayIndex::from_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        let mut app = App::new(Session::start(MemoryStore::new(), &Fiona, day, 6));
        for ch in "fio".chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }

        let text = screen(&app);
        assert!(text.contains("DAILY WORDLE #32"));
        assert!(text.contains(" F   I   O  [_]  · "));
        assert!(text.contains(" Q  W  E  R  T  Y  U  I  O  P "));
        assert!(text.contains("Guess 1/6"));
        assert!(app.finish().is_none());
    }
}
