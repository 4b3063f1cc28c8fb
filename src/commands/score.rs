//! One-shot scoring command
//!
//! Evaluates a guess against a target without any word-list membership check.

use crate::core::{GuessResult, Word, WordError, evaluate};

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns a `WordError` if either word is not five ASCII letters.
pub fn score_guess(guess: &str, target: &str) -> Result<GuessResult, WordError> {
    let guess = Word::new(guess.trim())?;
    let target = Word::new(target.trim())?;
    Ok(evaluate(&guess, &target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};

    #[test]
    fn scores_any_well_formed_words() {
        // Neither word needs to be in a word list
        let result = score_guess("qzxvj", "jvxzq").unwrap();
        assert_eq!(result.verdicts(), &[Present, Present, Correct, Present, Present]);
    }

    #[test]
    fn scores_case_insensitively() {
        let result = score_guess(" Speed", "ERASE ").unwrap();
        assert_eq!(result.verdicts(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn rejects_malformed_words() {
        assert_eq!(score_guess("spee", "erase"), Err(WordError::InvalidLength(4)));
        assert_eq!(score_guess("speed", "er4se"), Err(WordError::InvalidCharacters));
    }
}
