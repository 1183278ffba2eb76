//! Per-letter hints for colouring a keyboard

use crate::core::{Letter, ScoredGuess, Verdict};
use rustc_hash::FxHashMap;

/// Best verdict seen for every letter guessed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    best: FxHashMap<Letter, Verdict>,
}

impl KeyboardHints {
    #[must_use]
    pub fn from_scored(guesses: &[ScoredGuess]) -> Self {
        let mut hints = Self::default();
        for scored in guesses {
            hints.record(scored);
        }
        hints
    }

    /// Fold one scored guess in, keeping the best verdict per letter
    pub fn record(&mut self, scored: &ScoredGuess) {
        for (letter, verdict) in scored.iter() {
            self.best
                .entry(letter)
                .and_modify(|best| *best = (*best).max(verdict))
                .or_insert(verdict);
        }
    }

    /// `None` for letters that have not been guessed
    #[must_use]
    pub fn get(&self, letter: Letter) -> Option<Verdict> {
        self.best.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn hints_start_empty() {
        let hints = KeyboardHints::from_scored(&[]);
        assert!(hints.is_empty());
        assert_eq!(hints.get(letter('A')), None);
    }

    #[test]
    fn hints_keep_best_verdict() {
        let guesses = [
            score("NYBUN", "BUNNY").unwrap(),
            score("BUNNS", "BUNNY").unwrap(),
        ];
        let hints = KeyboardHints::from_scored(&guesses);

        assert_eq!(hints.get(letter('N')), Some(Verdict::Correct));
        assert_eq!(hints.get(letter('Y')), Some(Verdict::Present));
        assert_eq!(hints.get(letter('S')), Some(Verdict::Incorrect));
        assert_eq!(hints.get(letter('Q')), None);
        assert_eq!(hints.len(), 5);
    }

    #[test]
    fn hints_never_downgrade() {
        let mut hints = KeyboardHints::default();
        hints.record(&score("BUNNY", "BUNNY").unwrap());
        hints.record(&score("YBUNN", "BUNNY").unwrap());
        assert_eq!(hints.get(letter('B')), Some(Verdict::Correct));
    }
}
