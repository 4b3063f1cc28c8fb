//! Validation and source errors
//!
//! All of these are local, recoverable outcomes. A failed submission never
//! changes the round, so the caller shows a message and lets the player retry.

use thiserror::Error;

/// Why a guess submission (or round setup) was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("guess must be exactly 5 letters, got {len}")]
    InvalidLength { len: usize },
    #[error("guess must contain only letters A-Z")]
    InvalidCharacters,
    #[error("'{word}' is not in the word list")]
    NotInWordList { word: String },
    #[error("the round is already finished")]
    RoundFinished,
    #[error("a round needs at least one attempt")]
    InvalidMaxAttempts,
}

impl ValidationError {
    /// Short message for the presentation layer
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "Not enough letters",
            Self::InvalidCharacters => "Letters only",
            Self::NotInWordList { .. } => "Not in word list",
            Self::RoundFinished => "Round is over",
            Self::InvalidMaxAttempts => "Invalid number of attempts",
        }
    }
}

/// Error building a [`WordSource`](super::WordSource)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("word source has no target words")]
    Empty,
}
