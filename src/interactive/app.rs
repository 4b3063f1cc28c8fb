//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{RoundStatus, Session};
use crate::output::formatters::round_end_message;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<R> {
    pub session: Session<R>,
    /// Letters typed into the current row
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>) -> Self {
        let attempts = session.round().max_attempts();
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            &format!("Guess the five-letter word in {attempts} tries."),
            MessageStyle::Info,
        );
        app.add_message("Type letters, Enter to submit, Esc to quit.", MessageStyle::Info);
        app
    }

    /// Add a letter to the current row
    pub fn add_letter(&mut self, letter: char) {
        if self.input_buffer.len() < WORD_LENGTH && letter.is_ascii_alphabetic() {
            self.input_buffer.push(letter.to_ascii_uppercase());
        }
    }

    /// Delete the last letter of the current row
    pub fn delete_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the current row
    ///
    /// A rejected guess keeps the typed letters so the player can fix them.
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();
        match self.session.submit(&guess) {
            Err(err) => {
                debug!("Guess {guess:?} rejected: {err}");
                self.add_message(err.user_message(), MessageStyle::Error);
            }
            Ok(_) => {
                self.input_buffer.clear();
                if let Some((headline, detail)) = round_end_message(self.session.round()) {
                    let style = if self.session.round().status() == RoundStatus::Won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(&format!("{headline} {detail}"), style);
                    self.add_message("Press 'n' to play again or 'q' to quit.", MessageStyle::Info);
                }
            }
        }
    }

    /// Start a new round
    pub fn new_game(&mut self) {
        self.session.new_round();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New word chosen. Good luck!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.round().is_over() {
            // Round finished: only play again or quit
            match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Backspace => self.delete_letter(),
            KeyCode::Char(c) => self.add_letter(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
