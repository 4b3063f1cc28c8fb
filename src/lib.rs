//! Word Game
//!
//! A terminal word-guessing game: find the hidden five-letter word in six tries,
//! with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, evaluate};
//! use wordle_game::game::{RoundState, RoundStatus, WordSource};
//! use wordle_game::wordlists::{WORDS, loader::words_from_slice};
//!
//! // Score a single guess
//! let guess = Word::new("speed").unwrap();
//! let target = Word::new("erase").unwrap();
//! println!("{}", evaluate(&guess, &target).to_emoji());
//!
//! // Play a round against the embedded word list
//! let source = WordSource::from_words(words_from_slice(WORDS)).unwrap();
//! let round = RoundState::start(Word::new("crane").unwrap());
//! let (round, _) = round.submit_guess("crane", &source).unwrap();
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Round state machine and session
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
