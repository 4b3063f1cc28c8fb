//! TUI rendering with ratatui
//!
//! Tile board, on-screen keyboard, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{KEY_ROWS, RoundStatus};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    let play_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(main_chunks[0]);

    render_board(f, app, play_chunks[0]);
    render_keyboard(f, app, play_chunks[1]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

/// Style for a tile or key with the given verdict
fn verdict_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::new()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::new()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::new().fg(Color::White).bg(Color::DarkGray),
        None => Style::new().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD GAME 🟨")
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

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let round = app.session.round();
    let current_row = (!round.is_over()).then(|| round.current_row());

    let mut lines = Vec::with_capacity(round.max_attempts() * 2);
    for row in 0..round.max_attempts() {
        let tiles: Vec<Span> = if let Some(result) = round.history().get(row) {
            result
                .iter()
                .map(|(letter, verdict)| {
                    Span::styled(format!(" {} ", char::from(letter)), verdict_style(Some(verdict)))
                })
                .collect()
        } else if current_row == Some(row) {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            let style = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            (0..WORD_LENGTH)
                .map(|i| {
                    let text = typed
                        .get(i)
                        .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                    Span::styled(text, style)
                })
                .collect()
        } else {
            (0..WORD_LENGTH)
                .map(|_| Span::styled(" · ", Style::default().fg(Color::DarkGray)))
                .collect()
        };

        // Gap between tiles
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (i, tile) in tiles.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(tile);
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match round.status() {
        RoundStatus::InProgress => format!(
            " Guess {}/{} ",
            round.current_row() + 1,
            round.max_attempts()
        ),
        RoundStatus::Won => " Solved! ".to_string(),
        RoundStatus::Lost => format!(" The word was {} ", round.target()),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&key| {
                    let style = if key.len() == 1 {
                        verdict_style(keyboard.key_status(key))
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    [Span::styled(format!(" {key} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
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

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let streak_text = format!("Streak: {} (max {})", stats.current_streak, stats.max_streak);
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.session.round().is_over() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
