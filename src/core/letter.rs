//! A single uppercase letter
//!
//! Letters are stored as their ASCII byte so that they can index fixed-size
//! per-alphabet tables directly.

use super::InvalidInput;
use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// One uppercase letter, `A` through `Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub const A: Self = Self(b'A');

    /// Create a letter from a character
    ///
    /// # Errors
    /// Returns [`InvalidInput::InvalidLetter`] unless `c` is in `'A'..='Z'`.
    /// Lowercase letters are rejected, not folded.
    ///
    /// # Examples
    /// ```
    /// use wordle_core::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'Q');
    /// assert!(Letter::new('q').is_err());
    /// ```
    pub const fn new(c: char) -> Result<Self, InvalidInput> {
        if c.is_ascii_uppercase() {
            Ok(Self(c as u8))
        } else {
            Err(InvalidInput::InvalidLetter(c))
        }
    }

    /// Position in the alphabet (0 for `A`, 25 for `Z`)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = InvalidInput;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
