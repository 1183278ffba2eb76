//! Line-based interactive game
//!
//! Each line typed is fed to the game as key presses: letters append, `<`
//! erases, and the end of the line submits.

use crate::Result;
use crate::core::WORD_LENGTH;
use crate::game::{Game, GameStatus, Input};
use crate::output::{write_board, write_outcome};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Typed on its own line to abandon the game
const QUIT: &str = "/quit";

/// Play `game` to completion, reading key lines from `input`
///
/// Submit is only dispatched once the buffer holds a full word, so the game
/// never sees an incomplete guess. Returns the final status, which is
/// `InProgress` when input ends or the player quits early.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    out: &mut W,
) -> Result<GameStatus> {
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word. Type letters, '<' to erase, Enter to submit, {QUIT} to give up."
    )?;

    let mut line = String::new();
    while !game.is_over() {
        write_board(out, game)?;
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed");
            break;
        }
        if line.trim() == QUIT {
            info!(target_word = %game.target(), "player quit");
            break;
        }

        for key in Input::from_line(&line) {
            if key == Input::Enter && game.buffer().len() < WORD_LENGTH {
                writeln!(out, "Not enough letters.")?;
                continue;
            }
            game.handle(key)?;
        }
    }

    write_board(out, game)?;
    write_outcome(out, game)?;
    Ok(game.status())
}
