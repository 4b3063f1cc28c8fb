//! A play session: the live round, its keyboard and in-memory statistics
//!
//! Sessions are what the presentation layers drive. Nothing here outlives the
//! process.

use super::{KeyboardState, MAX_ATTEMPTS, RoundState, RoundStatus, ValidationError, WordSource};
use crate::core::GuessResult;
use rand::Rng;

/// Win/loss statistics across the rounds of one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// `guess_distribution[n - 1]` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    fn with_attempts(max_attempts: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_attempts.min(MAX_ATTEMPTS)],
            ..Self::default()
        }
    }

    /// Win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }

    fn record(&mut self, round: &RoundState) {
        self.games_played += 1;
        match round.status() {
            RoundStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                // Grows past the default six rows only for longer rounds
                let row = round.attempts_used().saturating_sub(1);
                if self.guess_distribution.len() <= row {
                    self.guess_distribution.resize(row + 1, 0);
                }
                self.guess_distribution[row] += 1;
            }
            RoundStatus::Lost => self.current_streak = 0,
            RoundStatus::InProgress => {}
        }
    }
}

/// The live round plus everything the presentation layer shows around it
pub struct Session<R> {
    source: WordSource,
    rng: R,
    round: RoundState,
    keyboard: KeyboardState,
    stats: Statistics,
}

impl<R: Rng> Session<R> {
    /// Start a session and its first round
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidMaxAttempts` if `max_attempts` is zero.
    pub fn new(
        source: WordSource,
        mut rng: R,
        max_attempts: usize,
    ) -> Result<Self, ValidationError> {
        let target = source.choose_target(&mut rng).clone();
        let round = RoundState::with_max_attempts(target, max_attempts)?;

        Ok(Self {
            source,
            rng,
            round,
            keyboard: KeyboardState::new(),
            stats: Statistics::with_attempts(max_attempts),
        })
    }

    /// Submit a guess to the live round
    ///
    /// On success the round and keyboard advance, and a round that just ended
    /// is counted in the statistics. On failure nothing changes.
    ///
    /// # Errors
    /// Propagates the round's `ValidationError`.
    pub fn submit(&mut self, guess: &str) -> Result<GuessResult, ValidationError> {
        let (next, result) = self.round.submit_guess(guess, &self.source).inspect_err(|err| {
            log::debug!("Rejected guess {guess:?}: {err}");
        })?;

        self.round = next;
        self.keyboard.record(&result);
        if self.round.is_over() {
            self.stats.record(&self.round);
        }

        Ok(result)
    }

    /// Replace the round with a fresh one and clear the keyboard
    ///
    /// Abandoning an unfinished round does not count as a game played.
    pub fn new_round(&mut self) {
        self.round = self.round.reset(&self.source, &mut self.rng);
        self.keyboard.clear();
    }

    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }
}
