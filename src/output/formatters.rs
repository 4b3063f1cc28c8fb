//! Formatting utilities for terminal output

use crate::core::{GuessResult, Verdict};
use crate::game::{KEY_ROWS, KeyboardState, RoundState, RoundStatus};
use colored::{ColoredString, Colorize};

/// Format a guess as colored letter tiles, e.g. " R  E  A  C  T "
#[must_use]
pub fn colored_tiles(result: &GuessResult) -> String {
    result
        .iter()
        .map(|(letter, verdict)| tile(char::from(letter), Some(verdict)).to_string())
        .collect()
}

/// Format the keyboard rows, coloring every letter by its best-known status
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> Vec<String> {
    KEY_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .filter(|key| key.len() == 1)
                .map(|key| {
                    let letter = key.chars().next().unwrap_or(' ');
                    tile(letter, keyboard.key_status(key)).to_string()
                })
                .collect()
        })
        .collect()
}

/// Plural-aware "N try/tries"
#[must_use]
pub fn tries(count: usize) -> String {
    if count == 1 {
        format!("{count} try")
    } else {
        format!("{count} tries")
    }
}

/// Headline and detail line for a finished round, `None` while it is in progress
#[must_use]
pub fn round_end_message(round: &RoundState) -> Option<(&'static str, String)> {
    match round.status() {
        RoundStatus::InProgress => None,
        RoundStatus::Won => Some((
            "🎉 You won!",
            format!("You guessed the word in {}!", tries(round.attempts_used())),
        )),
        RoundStatus::Lost => Some((
            "Game over.",
            format!("The word was: {}", round.target()),
        )),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    // Tests only ever disable color, so the global override is safe to share
    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn tiles_without_color_show_letters() {
        let result = evaluate(&Word::new("react").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(plain(|| colored_tiles(&result)), " R  E  A  C  T ");
    }

    #[test]
    fn keyboard_has_three_rows_of_letters() {
        let rows = plain(|| colored_keyboard(&KeyboardState::new()));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], " Q  W  E  R  T  Y  U  I  O  P ");
        assert_eq!(rows[2], " Z  X  C  V  B  N  M ");
    }

    #[test]
    fn tries_pluralizes() {
        assert_eq!(tries(1), "1 try");
        assert_eq!(tries(4), "4 tries");
    }

    #[test]
    fn round_end_messages() {
        let source = crate::game::WordSource::from_words(
            crate::wordlists::loader::words_from_slice(&["crane", "react"]),
        )
        .unwrap();
        let round = RoundState::with_max_attempts(Word::new("crane").unwrap(), 1).unwrap();
        assert_eq!(round_end_message(&round), None);

        let (won, _) = round.submit_guess("crane", &source).unwrap();
        let (headline, detail) = round_end_message(&won).unwrap();
        assert_eq!(headline, "🎉 You won!");
        assert_eq!(detail, "You guessed the word in 1 try!");

        let (lost, _) = round.submit_guess("react", &source).unwrap();
        let (headline, detail) = round_end_message(&lost).unwrap();
        assert_eq!(headline, "Game over.");
        assert_eq!(detail, "The word was: CRANE");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 6.0, 6), "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(6.0, 6.0, 6), "██████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(3.0, 6.0, 6), "███░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
