//! Word source: target words, accepted guesses and random selection

use super::SourceError;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Words a round can draw its target from, plus every word accepted as a guess
///
/// Targets are always valid guesses. Extra guesses widen the accepted set
/// without ever becoming targets.
#[derive(Debug, Clone)]
pub struct WordSource {
    targets: Vec<Word>,
    valid_guesses: FxHashSet<Word>,
}

impl WordSource {
    /// Build a source from target words and additional accepted guesses
    ///
    /// # Errors
    /// Returns `SourceError::Empty` if there are no target words.
    pub fn new(targets: Vec<Word>, extra_guesses: Vec<Word>) -> Result<Self, SourceError> {
        if targets.is_empty() {
            return Err(SourceError::Empty);
        }

        let mut valid_guesses: FxHashSet<Word> = targets.iter().cloned().collect();
        valid_guesses.extend(extra_guesses);

        Ok(Self {
            targets,
            valid_guesses,
        })
    }

    /// Build a source where the targets and the accepted guesses are the same list
    ///
    /// # Errors
    /// Returns `SourceError::Empty` if `words` is empty.
    pub fn from_words(words: Vec<Word>) -> Result<Self, SourceError> {
        Self::new(words, Vec::new())
    }

    /// Pick a target uniformly at random
    pub fn choose_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // `targets` is never empty, see `new`
        self.targets
            .choose(rng)
            .unwrap_or_else(|| &self.targets[0])
    }

    /// Check whether a word is accepted as a guess
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.valid_guesses.contains(word)
    }

    /// Check whether a word can be chosen as a target
    #[must_use]
    pub fn is_target(&self, word: &Word) -> bool {
        self.targets.contains(word)
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.valid_guesses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_targets_rejected() {
        let extra = words_from_slice(&["crane"]);
        assert_eq!(
            WordSource::new(Vec::new(), extra).unwrap_err(),
            SourceError::Empty
        );
        assert!(WordSource::from_words(Vec::new()).is_err());
    }

    #[test]
    fn guesses_include_targets_and_extras() {
        let source = WordSource::new(
            words_from_slice(&["crane", "slate"]),
            words_from_slice(&["audio", "crane"]),
        )
        .unwrap();

        assert_eq!(source.target_count(), 2);
        assert_eq!(source.guess_count(), 3);
        assert!(source.is_valid_guess(&Word::new("AUDIO").unwrap()));
        assert!(source.is_valid_guess(&Word::new("SLATE").unwrap()));
        assert!(!source.is_valid_guess(&Word::new("ROBOT").unwrap()));
        assert!(!source.is_target(&Word::new("AUDIO").unwrap()));
    }

    #[test]
    fn chosen_target_comes_from_targets() {
        let source = WordSource::new(
            words_from_slice(&["crane", "slate", "react"]),
            words_from_slice(&["audio"]),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let target = source.choose_target(&mut rng);
            assert!(source.is_target(target));
        }
    }

    #[test]
    fn selection_covers_all_targets() {
        let source =
            WordSource::from_words(words_from_slice(&["crane", "slate", "react"])).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let seen: FxHashSet<&Word> = (0..200).map(|_| source.choose_target(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let source = WordSource::from_words(words_from_slice(&["crane", "slate", "react", "erase"]))
            .unwrap();

        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| source.choose_target(&mut rng).clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(3), picks(3));
    }
}
