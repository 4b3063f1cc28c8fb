//! Round state machine
//!
//! A round moves from `InProgress` to `Won` or `Lost` and stays there.
//! `RoundState` is a plain value: `submit_guess` borrows the current state and
//! hands back the next one, so a rejected guess leaves the caller's state intact.

use super::{ValidationError, WordSource};
use crate::core::{GuessResult, Word, WordError, evaluate};
use log::{debug, info};
use rand::Rng;

/// Default number of guesses per round
pub const MAX_ATTEMPTS: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// True once the round has been won or lost
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Snapshot of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Word,
    history: Vec<GuessResult>,
    status: RoundStatus,
    max_attempts: usize,
}

impl RoundState {
    /// Start a round with the default six attempts
    #[must_use]
    pub fn start(target: Word) -> Self {
        Self::new_unchecked(target, MAX_ATTEMPTS)
    }

    /// Start a round with a custom number of attempts
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidMaxAttempts` if `max_attempts` is zero.
    pub fn with_max_attempts(target: Word, max_attempts: usize) -> Result<Self, ValidationError> {
        if max_attempts == 0 {
            return Err(ValidationError::InvalidMaxAttempts);
        }
        Ok(Self::new_unchecked(target, max_attempts))
    }

    fn new_unchecked(target: Word, max_attempts: usize) -> Self {
        info!("Round started ({max_attempts} attempts)");
        debug!("Target word: {target}");

        Self {
            target,
            history: Vec::with_capacity(max_attempts.min(MAX_ATTEMPTS)),
            status: RoundStatus::InProgress,
            max_attempts,
        }
    }

    /// Discard this round and start a new one with a freshly drawn target
    ///
    /// The new target may equal the old one; the source decides.
    #[must_use]
    pub fn reset<R: Rng + ?Sized>(&self, source: &WordSource, rng: &mut R) -> Self {
        let target = source.choose_target(rng).clone();
        Self::new_unchecked(target, self.max_attempts)
    }

    /// Submit a guess and compute the next state
    ///
    /// Checks, in order: the round is still in progress, the guess has five
    /// letters, every character is a letter, and the source accepts the word.
    /// Surrounding whitespace is ignored and case is normalized.
    ///
    /// # Errors
    /// Returns the matching `ValidationError`; `self` is never modified.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{RoundState, RoundStatus, ValidationError, WordSource};
    /// use wordle_game::wordlists::loader::words_from_slice;
    ///
    /// let source = WordSource::from_words(words_from_slice(&["crane", "react"])).unwrap();
    /// let round = RoundState::start(Word::new("crane").unwrap());
    ///
    /// let (round, result) = round.submit_guess("react", &source).unwrap();
    /// assert_eq!(result.to_emoji(), "🟨🟨🟩🟨⬜");
    /// assert_eq!(round.status(), RoundStatus::InProgress);
    ///
    /// assert_eq!(
    ///     round.submit_guess("crn", &source).unwrap_err(),
    ///     ValidationError::InvalidLength { len: 3 }
    /// );
    /// ```
    pub fn submit_guess(
        &self,
        guess: &str,
        source: &WordSource,
    ) -> Result<(Self, GuessResult), ValidationError> {
        if self.status.is_terminal() {
            return Err(ValidationError::RoundFinished);
        }

        let guess = parse_guess(guess)?;
        if !source.is_valid_guess(&guess) {
            return Err(ValidationError::NotInWordList {
                word: guess.text().to_string(),
            });
        }

        let result = evaluate(&guess, &self.target);
        let mut next = self.clone();
        next.history.push(result.clone());

        if guess == self.target {
            next.status = RoundStatus::Won;
        } else if next.history.len() == self.max_attempts {
            next.status = RoundStatus::Lost;
        }

        debug!(
            "Guess {}/{}: {} {}",
            next.history.len(),
            self.max_attempts,
            guess,
            result.to_emoji()
        );
        if next.status.is_terminal() {
            info!(
                "Round {:?} after {} guesses",
                next.status,
                next.history.len()
            );
        }

        Ok((next, result))
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Number of guesses scored so far
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    /// Index of the board row the next guess goes into
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The hidden word, for collaborators that need it regardless of status
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// The hidden word, only once the round has ended
    #[must_use]
    pub const fn revealed_target(&self) -> Option<&Word> {
        if self.status.is_terminal() {
            Some(&self.target)
        } else {
            None
        }
    }

    /// The result of the most recent guess
    #[must_use]
    pub fn last_result(&self) -> Option<&GuessResult> {
        self.history.last()
    }
}

/// Normalize raw input into a `Word`, mapping word errors onto validation errors
fn parse_guess(raw: &str) -> Result<Word, ValidationError> {
    Word::new(raw.trim()).map_err(|err| match err {
        WordError::InvalidLength(len) => ValidationError::InvalidLength { len },
        WordError::NonAscii | WordError::InvalidCharacters => ValidationError::InvalidCharacters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn source() -> WordSource {
        WordSource::new(
            words_from_slice(&["crane", "slate", "erase", "robot"]),
            words_from_slice(&["react", "speed", "audio", "floor", "eerie", "pious"]),
        )
        .unwrap()
    }

    fn round(target: &str) -> RoundState {
        RoundState::start(Word::new(target).unwrap())
    }

    #[test]
    fn start_is_empty_and_in_progress() {
        let state = round("crane");
        assert_eq!(state.status(), RoundStatus::InProgress);
        assert!(state.history().is_empty());
        assert_eq!(state.max_attempts(), MAX_ATTEMPTS);
        assert_eq!(state.attempts_remaining(), 6);
        assert_eq!(state.revealed_target(), None);
    }

    #[test]
    fn huge_attempt_limit_is_accepted() {
        let target = Word::new("crane").unwrap();
        let state = RoundState::with_max_attempts(target, usize::MAX).unwrap();
        assert_eq!(state.attempts_remaining(), usize::MAX);

        let (state, _) = state.submit_guess("react", &source()).unwrap();
        assert_eq!(state.status(), RoundStatus::InProgress);
        assert_eq!(state.attempts_remaining(), usize::MAX - 1);
    }

    #[test]
    fn zero_attempts_rejected() {
        let target = Word::new("crane").unwrap();
        assert_eq!(
            RoundState::with_max_attempts(target.clone(), 0).unwrap_err(),
            ValidationError::InvalidMaxAttempts
        );
        assert_eq!(
            RoundState::with_max_attempts(target, 1).unwrap().max_attempts(),
            1
        );
    }

    #[test]
    fn wrong_length_rejected_without_change() {
        let state = round("crane");
        assert_eq!(
            state.submit_guess("cran", &source()).unwrap_err(),
            ValidationError::InvalidLength { len: 4 }
        );
        assert_eq!(
            state.submit_guess("cranes", &source()).unwrap_err(),
            ValidationError::InvalidLength { len: 6 }
        );
        assert!(state.history().is_empty());
    }

    #[test]
    fn non_letters_rejected() {
        let state = round("crane");
        assert_eq!(
            state.submit_guess("cr4ne", &source()).unwrap_err(),
            ValidationError::InvalidCharacters
        );
    }

    #[test]
    fn unknown_word_rejected() {
        let state = round("crane");
        assert_eq!(
            state.submit_guess("zzzzz", &source()).unwrap_err(),
            ValidationError::NotInWordList {
                word: "ZZZZZ".to_string()
            }
        );
    }

    #[test]
    fn input_is_trimmed_and_uppercased() {
        let state = round("crane");
        let (next, result) = state.submit_guess("  react\n", &source()).unwrap();
        assert_eq!(result.guess().text(), "REACT");
        assert_eq!(next.attempts_used(), 1);
    }

    #[test]
    fn valid_guess_appends_history() {
        let state = round("crane");
        let (next, result) = state.submit_guess("react", &source()).unwrap();

        assert_eq!(next.history(), &[result.clone()]);
        assert_eq!(next.status(), RoundStatus::InProgress);
        assert_eq!(next.current_row(), 1);
        assert_eq!(next.last_result(), Some(&result));
        // the borrowed state is untouched
        assert!(state.history().is_empty());
    }

    #[test]
    fn correct_guess_wins() {
        let state = round("crane");
        let (state, _) = state.submit_guess("react", &source()).unwrap();
        let (state, result) = state.submit_guess("crane", &source()).unwrap();

        assert!(result.is_win());
        assert_eq!(state.status(), RoundStatus::Won);
        assert_eq!(state.attempts_used(), 2);
        assert_eq!(state.revealed_target().map(Word::text), Some("CRANE"));
    }

    #[test]
    fn win_on_last_attempt_is_won_not_lost() {
        let mut state = round("crane");
        for _ in 0..5 {
            state = state.submit_guess("audio", &source()).unwrap().0;
        }
        let (state, _) = state.submit_guess("crane", &source()).unwrap();
        assert_eq!(state.status(), RoundStatus::Won);
    }

    #[test]
    fn exhausting_attempts_loses_and_reveals_target() {
        let mut state = round("crane");
        let guesses = ["react", "slate", "audio", "speed", "floor", "robot"];
        for (i, guess) in guesses.iter().enumerate() {
            assert_eq!(state.revealed_target(), None);
            state = state.submit_guess(guess, &source()).unwrap().0;
            assert_eq!(state.attempts_used(), i + 1);
        }

        assert_eq!(state.status(), RoundStatus::Lost);
        assert_eq!(state.attempts_remaining(), 0);
        assert_eq!(state.revealed_target().map(Word::text), Some("CRANE"));
    }

    #[test]
    fn custom_attempt_limit() {
        let state = RoundState::with_max_attempts(Word::new("crane").unwrap(), 2).unwrap();
        let (state, _) = state.submit_guess("react", &source()).unwrap();
        let (state, _) = state.submit_guess("slate", &source()).unwrap();
        assert_eq!(state.status(), RoundStatus::Lost);
    }

    #[test]
    fn finished_round_rejects_everything() {
        let (won, _) = round("crane").submit_guess("crane", &source()).unwrap();
        for guess in ["react", "crane", "xx", "zzzzz"] {
            assert_eq!(
                won.submit_guess(guess, &source()).unwrap_err(),
                ValidationError::RoundFinished
            );
        }
        assert_eq!(won.history().len(), 1);

        let mut lost = RoundState::with_max_attempts(Word::new("crane").unwrap(), 1).unwrap();
        lost = lost.submit_guess("react", &source()).unwrap().0;
        assert_eq!(
            lost.submit_guess("crane", &source()).unwrap_err(),
            ValidationError::RoundFinished
        );
        assert_eq!(lost.history().len(), 1);
    }

    #[test]
    fn reset_starts_fresh_round_from_source() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(1);
        let state = RoundState::with_max_attempts(Word::new("crane").unwrap(), 4).unwrap();
        let (state, _) = state.submit_guess("crane", &source).unwrap();

        for _ in 0..20 {
            let fresh = state.reset(&source, &mut rng);
            assert_eq!(fresh.status(), RoundStatus::InProgress);
            assert!(fresh.history().is_empty());
            assert_eq!(fresh.max_attempts(), 4);
            assert!(source.is_target(fresh.target()));
        }
    }

    #[test]
    fn guess_only_words_are_never_targets() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(99);
        let state = round("crane");

        for _ in 0..50 {
            let fresh = state.reset(&source, &mut rng);
            assert!(!["REACT", "SPEED", "AUDIO"].contains(&fresh.target().text()));
        }
    }
}
