//! Best-known letter status for the on-screen keyboard

use crate::core::{GuessResult, Verdict};

/// Layout of the on-screen keyboard
pub const KEY_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "BACK"],
];

/// Best verdict seen so far for each letter A-Z
///
/// A letter's status only ever improves: `Correct > Present > Absent > unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<Verdict>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored guess into the keyboard
    pub fn record(&mut self, result: &GuessResult) {
        for (letter, verdict) in result.iter() {
            if let Some(slot) = Self::index(letter).map(|i| &mut self.letters[i]) {
                // Option<Verdict> orders None below every Some
                *slot = (*slot).max(Some(verdict));
            }
        }
    }

    /// Best-known status of a letter, `None` if it has not been guessed
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<Verdict> {
        Self::index(letter.to_ascii_uppercase()).and_then(|i| self.letters[i])
    }

    /// Status of a key label; multi-letter keys (ENTER, BACK) have none
    #[must_use]
    pub fn key_status(&self, key: &str) -> Option<Verdict> {
        match key.as_bytes() {
            [letter] => self.status(*letter),
            _ => None,
        }
    }

    /// Forget everything, for a new round
    pub fn clear(&mut self) {
        self.letters = [None; 26];
    }

    /// Letters whose best-known status is `verdict`, in alphabetical order
    pub fn letters_with(&self, verdict: Verdict) -> impl Iterator<Item = char> + '_ {
        (b'A'..=b'Z')
            .filter(move |&letter| self.status(letter) == Some(verdict))
            .map(char::from)
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| usize::from(letter - b'A'))
    }
}
