//! Core domain types for Wordle
//!
//! This module contains the letter, word and scoring types. Everything here
//! is pure: no I/O, no logging, no shared state.

mod bag;
mod letter;
mod score;
mod word;

pub use bag::LetterBag;
pub use letter::{ALPHABET_SIZE, Letter};
pub use score::{ScoredGuess, Verdict, score};
pub use word::{InvalidInput, WORD_LENGTH, Word};
