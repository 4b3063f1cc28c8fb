//! Core domain types for the word game
//!
//! Words, verdicts and the evaluator. Everything here is pure: no I/O,
//! no randomness, no shared state.

mod verdict;
mod word;

pub use verdict::{GuessResult, Verdict, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
