//! Guess scoring against a target word
//!
//! Each letter of a guess receives a [`Verdict`]:
//! - `Correct` = letter in the right position
//! - `Present` = letter in the target, elsewhere
//! - `Incorrect` = letter not in the target, or all its copies already used
//!
//! Duplicate letters are resolved with a [`LetterBag`] of the target's
//! letters, consumed left to right.

use super::word::WORD_LENGTH;
use super::{InvalidInput, Letter, LetterBag, Word};

/// Outcome for one letter position of a guess
///
/// Ordered from least to most informative, so the best verdict seen for a
/// letter is the `max` of its verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Incorrect,
    Present,
    Correct,
}

impl Verdict {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜/⬛ for incorrect
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Incorrect),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// A guess together with the verdict for each of its letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredGuess {
    word: Word,
    verdicts: [Verdict; WORD_LENGTH],
}

impl ScoredGuess {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. Fill a bag with one entry per letter of the target
    /// 2. Walk the guess from left to right. A letter with no copies left in
    ///    the bag is `Incorrect`. Otherwise one copy is consumed and the
    ///    letter is `Correct` when it matches the target at that position,
    ///    `Present` when it does not.
    ///
    /// Because consumption happens position by position, a repeated guess
    /// letter never earns more `Correct`/`Present` verdicts than the target
    /// has copies of it, and earlier positions claim copies first.
    ///
    /// # Examples
    /// ```
    /// use wordle_core::core::{ScoredGuess, Verdict::*, Word};
    ///
    /// let target = Word::new("BUNNY").unwrap();
    /// let guess = Word::new("NYBUN").unwrap();
    ///
    /// let scored = ScoredGuess::calculate(&guess, &target);
    /// assert_eq!(scored.verdicts(), [Present; 5]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut remaining = LetterBag::from_word(target);
        let mut verdicts = [Verdict::Incorrect; WORD_LENGTH];

        for (i, (verdict, &letter)) in verdicts.iter_mut().zip(guess.letters()).enumerate() {
            if !remaining.take(letter) {
                continue;
            }
            *verdict = if letter == target.letter_at(i) {
                Verdict::Correct
            } else {
                Verdict::Present
            };
        }

        Self {
            word: *guess,
            verdicts,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> [Verdict; WORD_LENGTH] {
        self.verdicts
    }

    /// Letter and verdict pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, Verdict)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.verdicts.iter().copied())
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.verdicts.iter().all(|&v| v == Verdict::Correct)
    }

    /// Number of positions carrying `verdict`
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.verdicts.iter().filter(|&&v| v == verdict).count()
    }

    /// Parse a verdict row from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_core::core::{ScoredGuess, Verdict::*};
    ///
    /// let row = ScoredGuess::parse_verdicts("GY-gy").unwrap();
    /// assert_eq!(row, [Correct, Present, Incorrect, Correct, Present]);
    /// assert!(ScoredGuess::parse_verdicts("GYG").is_none());
    /// ```
    #[must_use]
    pub fn parse_verdicts(s: &str) -> Option<[Verdict; WORD_LENGTH]> {
        let mut verdicts = [Verdict::Incorrect; WORD_LENGTH];
        let mut symbols = s.chars();

        for slot in &mut verdicts {
            *slot = Verdict::from_symbol(symbols.next()?)?;
        }

        if symbols.next().is_some() {
            return None;
        }

        Some(verdicts)
    }

    /// Convert the verdicts to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.emoji()).collect()
    }
}

/// Score a guess against a target, both given as text
///
/// # Errors
/// Returns [`InvalidInput`] if either word is not exactly five uppercase
/// letters `A`-`Z`.
///
/// # Examples
/// ```
/// use wordle_core::core::{score, Verdict::*};
///
/// let scored = score("WHALE", "BUNNY").unwrap();
/// assert_eq!(scored.verdicts(), [Incorrect; 5]);
///
/// assert!(score("WHAL", "BUNNY").is_err());
/// assert!(score("WHALE", "bunny").is_err());
/// ```
pub fn score(guess: &str, target: &str) -> Result<ScoredGuess, InvalidInput> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(ScoredGuess::calculate(&guess, &target))
}
