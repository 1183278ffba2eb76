//! Score a single guess

use crate::Result;
use crate::core::{ScoredGuess, Word};
use crate::output::write_scored;
use std::io::Write;

/// Score `guess` against `target` and write the result
///
/// The guess is case-folded to uppercase before validation. With `emoji`
/// set only the emoji row is written.
///
/// # Errors
/// Returns an error if `guess` is not a five-letter word or on I/O failure.
pub fn run_score<W: Write>(
    guess: &str,
    target: &Word,
    emoji: bool,
    out: &mut W,
) -> Result<ScoredGuess> {
    let guess = Word::new(&guess.to_uppercase())?;
    let scored = ScoredGuess::calculate(&guess, target);

    if emoji {
        writeln!(out, "{}", scored.to_emoji())?;
    } else {
        write_scored(out, &scored)?;
    }
    Ok(scored)
}
