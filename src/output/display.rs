//! Display functions for game state

use super::formatters::{buffer_row, empty_row, keyboard_rows, scored_row};
use crate::core::ScoredGuess;
use crate::game::{Game, GameStatus, MAX_GUESSES};
use colored::Colorize;
use std::io::{self, Write};

/// Write the guess grid: past rows, the active row, then empty rows
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    for scored in game.scored_guesses() {
        writeln!(out, "  {}", scored_row(&scored))?;
    }

    let mut rows = game.past_guesses().len();
    if !game.is_over() && rows < MAX_GUESSES {
        writeln!(out, "  {}", buffer_row(game.buffer()))?;
        rows += 1;
    }
    for _ in rows..MAX_GUESSES {
        writeln!(out, "  {}", empty_row())?;
    }

    writeln!(out)?;
    for row in keyboard_rows(&game.keyboard_hints()) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)
}

/// Write one scored guess with its emoji summary
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_scored<W: Write>(out: &mut W, scored: &ScoredGuess) -> io::Result<()> {
    writeln!(out, "{}  {}", scored_row(scored), scored.to_emoji())
}

/// Write the end-of-game message
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_outcome<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let attempts = game.past_guesses().len();
    match game.status() {
        GameStatus::Won => writeln!(
            out,
            "{}",
            format!(
                "✅ Solved in {attempts} {}!",
                if attempts == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        )?,
        GameStatus::Lost => writeln!(
            out,
            "{} The word was {}",
            format!("❌ Out of guesses after {attempts}.").red().bold(),
            game.target().to_string().bright_yellow().bold()
        )?,
        GameStatus::InProgress => writeln!(
            out,
            "Game left unfinished after {attempts} of {MAX_GUESSES} guesses."
        )?,
    }

    writeln!(out)?;
    for scored in game.scored_guesses() {
        writeln!(out, "  {}", scored.to_emoji())?;
    }
    Ok(())
}
