//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::game::Session;
use crate::output::{print_guess_result, print_keyboard, print_round_end, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> Result<()> {
    let stdin = io::stdin();
    play_lines(session, stdin.lock())
}

/// Drive a session from any line source
///
/// Ends on `quit`, on end of input, or when the player declines another round.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn play_lines<R: Rng, I: BufRead>(session: &mut Session<R>, mut input: I) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Word Game - Simple Mode       ║");
    println!("╚══════════════════════════════════════╝\n");
    println!(
        "Guess the hidden five-letter word in {} tries.",
        session.round().max_attempts()
    );
    println!("Commands: 'quit' to exit, 'new' for a new word, ':stats' for statistics\n");

    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.round().current_row() + 1,
            session.round().max_attempts()
        );
        let Some(line) = read_line(&mut input, &prompt)? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.new_round();
                println!("\n🔄 New word chosen!\n");
            }
            // Prefixed so it can never shadow a five-letter guess
            ":stats" => print_statistics(session.stats()),
            guess => match session.submit(guess) {
                Err(err) => println!("{} {}\n", "❌".red(), err.user_message()),
                Ok(result) => {
                    print_guess_result(session.round().attempts_used(), &result);

                    if session.round().is_over() {
                        print_round_end(session.round());
                        print_statistics(session.stats());

                        let answer = read_line(&mut input, "\nPlay again? (yes/no)")?;
                        if matches!(answer.as_deref(), Some("yes" | "y")) {
                            session.new_round();
                            println!("\n🔄 New game started!\n");
                        } else {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    } else {
                        println!();
                        print_keyboard(session.keyboard());
                        println!();
                    }
                }
            },
        }
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<I: BufRead>(input: &mut I, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;

    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{RoundStatus, WordSource};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn session() -> Session<StdRng> {
        let source = WordSource::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["react", "slate"]),
        )
        .unwrap();
        Session::new(source, StdRng::seed_from_u64(0), 6).unwrap()
    }

    #[test]
    fn plays_a_winning_round() {
        let mut session = session();
        play_lines(&mut session, Cursor::new("react\ncrane\nno\n")).unwrap();

        assert_eq!(session.round().status(), RoundStatus::Won);
        assert_eq!(session.stats().games_won, 1);
    }

    #[test]
    fn invalid_guesses_do_not_use_attempts() {
        let mut session = session();
        play_lines(&mut session, Cursor::new("cra\nzzzzz\n12345\nreact\n")).unwrap();

        assert_eq!(session.round().attempts_used(), 1);
        assert_eq!(session.round().status(), RoundStatus::InProgress);
    }

    #[test]
    fn play_again_starts_new_round() {
        let mut session = session();
        play_lines(&mut session, Cursor::new("crane\nyes\nslate\nquit\n")).unwrap();

        assert_eq!(session.stats().games_played, 1);
        assert_eq!(session.round().attempts_used(), 1);
    }

    #[test]
    fn stats_is_a_guessable_word() {
        let source = WordSource::from_words(words_from_slice(&["stats"])).unwrap();
        let mut session = Session::new(source, StdRng::seed_from_u64(0), 6).unwrap();
        play_lines(&mut session, Cursor::new(":stats\nstats\nno\n")).unwrap();

        assert_eq!(session.round().status(), RoundStatus::Won);
        assert_eq!(session.round().attempts_used(), 1);
    }

    #[test]
    fn new_command_abandons_round() {
        let mut session = session();
        play_lines(&mut session, Cursor::new("react\nnew\n")).unwrap();

        assert!(session.round().history().is_empty());
        assert_eq!(session.stats().games_played, 0);
    }
}
