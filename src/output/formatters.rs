//! Formatting utilities for terminal output

use crate::core::{Letter, ScoredGuess, Verdict, WORD_LENGTH};
use crate::game::KeyboardHints;
use colored::{ColoredString, Colorize};

/// Keyboard layout, one string per row
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Placeholder for an empty square
const EMPTY: char = '_';

/// One letter square coloured by its verdict
#[must_use]
pub fn tile(letter: Letter, verdict: Verdict) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Incorrect => text.white().on_bright_black(),
    }
}

/// A submitted guess as a row of coloured squares
#[must_use]
pub fn scored_row(scored: &ScoredGuess) -> String {
    scored
        .iter()
        .map(|(letter, verdict)| tile(letter, verdict).to_string())
        .collect()
}

/// The guess being typed, padded with empty squares
#[must_use]
pub fn buffer_row(buffer: &[Letter]) -> String {
    let mut row = String::with_capacity(WORD_LENGTH * 3);
    for i in 0..WORD_LENGTH {
        let square = buffer.get(i).map_or(EMPTY, |l| l.as_char());
        row.push(' ');
        row.push(square);
        row.push(' ');
    }
    row.bold().to_string()
}

/// A row not reached yet
#[must_use]
pub fn empty_row() -> String {
    format!(" {EMPTY} ").repeat(WORD_LENGTH).bright_black().to_string()
}

/// Keyboard rows with each guessed key coloured by its best verdict
#[must_use]
pub fn keyboard_rows(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .filter_map(|c| Letter::new(c).ok())
                .map(|letter| match hints.get(letter) {
                    Some(verdict) => tile(letter, verdict).to_string(),
                    None => format!(" {letter} "),
                })
                .collect::<String>()
        })
        .collect()
}
