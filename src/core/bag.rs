//! Multiset of letters still available for scoring

use super::letter::ALPHABET_SIZE;
use super::{Letter, Word};

/// Per-letter remaining counts, one slot per letter of the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterBag {
    counts: [u8; ALPHABET_SIZE],
}

impl LetterBag {
    /// Bag holding one entry for every position of `word`
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        let mut bag = Self::default();
        for letter in word.letters() {
            bag.counts[letter.index()] += 1;
        }
        bag
    }

    #[inline]
    #[must_use]
    pub const fn count(&self, letter: Letter) -> u8 {
        self.counts[letter.index()]
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.count(letter) > 0
    }

    /// Remove one instance of `letter`, returning whether one was there
    pub fn take(&mut self, letter: Letter) -> bool {
        let count = &mut self.counts[letter.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Total number of letters left in the bag
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}
