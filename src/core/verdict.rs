//! Guess evaluation and per-letter feedback
//!
//! Each position of a guess receives one of three verdicts:
//! - Absent (letter not in the word, or all its copies already used)
//! - Present (letter in the word, wrong position)
//! - Correct (letter in the correct position)

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Feedback for one guessed letter
///
/// Ordered by how much it tells the player: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Lowercase name, as used in status labels
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The scored outcome of one guess
///
/// Holds the guessed word and one verdict per position. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    guess: Word,
    verdicts: [Verdict; WORD_LENGTH],
}

impl GuessResult {
    /// The word that was guessed
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Verdicts by position
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.verdicts
    }

    /// True when every position is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.verdicts.iter().all(|&v| v == Verdict::Correct)
    }

    /// Iterate over `(letter, verdict)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Verdict)> + '_ {
        self.guess.chars().iter().copied().zip(self.verdicts)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.verdicts.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, evaluate};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// assert_eq!(evaluate(&guess, &target).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.emoji()).collect()
    }
}

/// Score `guess` against `target`
///
/// Implements the exact duplicate-letter rules of the game: exact matches are
/// credited first, then the remaining letters claim unconsumed target letters
/// from left to right.
///
/// # Algorithm
/// 1. First pass: Mark all exact matches (correct) and remove them from the available pool
/// 2. Second pass: Mark present-but-wrong-position letters from the remaining pool
///
/// # Examples
/// ```
/// use wordle_game::core::{Verdict, Word, evaluate};
///
/// let guess = Word::new("react").unwrap();
/// let target = Word::new("crane").unwrap();
/// let result = evaluate(&guess, &target);
///
/// use Verdict::{Absent, Correct, Present};
/// assert_eq!(result.verdicts(), &[Present, Present, Correct, Present, Absent]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> GuessResult {
    let mut verdicts = [Verdict::Absent; WORD_LENGTH];
    let mut target_available = target.char_counts();

    // First pass: exact position matches
    // Allow: Index needed to access guess[i], target[i], and set verdicts[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.char_at(i) == target.char_at(i) {
            verdicts[i] = Verdict::Correct;

            if let Some(count) = target_available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but an unconsumed copy exists
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if verdicts[i] == Verdict::Correct {
            continue;
        }

        if let Some(count) = target_available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            verdicts[i] = Verdict::Present;
            *count -= 1;
        }
    }

    GuessResult {
        guess: guess.clone(),
        verdicts,
    }
}
