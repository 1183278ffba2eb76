//! Wordle Core
//!
//! Guess scoring and the game state machine for a Wordle-style word game.
//! A presentation layer feeds letters, backspaces and submits into a
//! [`Game`](game::Game) and reads back the scored history to draw it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_core::core::{Verdict, Word, score};
//! use wordle_core::game::{Game, GameStatus, Input};
//!
//! // Score a guess directly
//! let scored = score("NYBUN", "BUNNY").unwrap();
//! assert_eq!(scored.verdicts(), [Verdict::Present; 5]);
//!
//! // Or play a game key by key
//! let mut game = Game::new(Word::new("BUNNY").unwrap());
//! for key in Input::from_line("bunny") {
//!     game.handle(key).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

use thiserror::Error;

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup for the binary
pub mod logging;

/// The errors that `wordle_core` can produce.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid word")]
    InvalidInput(#[from] crate::core::InvalidInput),

    #[error("guess rejected")]
    RejectedGuess(#[from] crate::game::RejectedGuess),

    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
