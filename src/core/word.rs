//! Five-letter word representation
//!
//! A `Word` is only ever built from exactly five uppercase letters; nothing is
//! truncated, padded or case-folded on the way in.

use super::Letter;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every guess and target
pub const WORD_LENGTH: usize = 5;

/// Malformed input handed to the scorer or to [`Word::new`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("'{0}' is not an uppercase letter A-Z")]
    InvalidLetter(char),
}

/// A validated five-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [Letter; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `InvalidInput` if:
    /// - The string is not exactly 5 characters long
    /// - Any character is outside `'A'..='Z'`
    ///
    /// # Examples
    /// ```
    /// use wordle_core::core::Word;
    ///
    /// let word = Word::new("BUNNY").unwrap();
    /// assert_eq!(word.to_string(), "BUNNY");
    ///
    /// assert!(Word::new("bunny").is_err());
    /// assert!(Word::new("BUNNYS").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InvalidInput> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(InvalidInput::InvalidLength(len));
        }

        let mut letters = [Letter::A; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            *slot = Letter::new(c)?;
        }

        Ok(Self { letters })
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }
}

impl From<[Letter; WORD_LENGTH]> for Word {
    fn from(letters: [Letter; WORD_LENGTH]) -> Self {
        Self { letters }
    }
}

impl FromStr for Word {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
