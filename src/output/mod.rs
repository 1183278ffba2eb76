//! Terminal output formatting
//!
//! Display utilities for the CLI: coloured letter squares, the guess grid
//! and the keyboard.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_outcome, write_scored};
