//! Game state machine
//!
//! A [`Game`] owns the target word, the append-only list of submitted guesses
//! and the in-progress buffer. It is mutated only through
//! [`append_char`](Game::append_char), [`backspace`](Game::backspace) and
//! [`submit_guess`](Game::submit_guess); everything a presentation layer
//! needs is exposed through read-only accessors.

mod input;
mod keyboard;

pub use input::Input;
pub use keyboard::KeyboardHints;

use crate::core::{Letter, ScoredGuess, WORD_LENGTH, Word};
use thiserror::Error;
use tracing::{debug, trace};

/// Number of guesses allowed before an unsolved game is lost
pub const MAX_GUESSES: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` are terminal
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Reasons a submit is refused; the game is left untouched in every case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectedGuess {
    #[error("the game is already over")]
    GameOver,

    #[error("all 6 guesses have already been used")]
    OutOfGuesses,

    #[error("guess has {len} letters, expected 5")]
    Incomplete { len: usize },
}

/// One game against a fixed target word
///
/// # Examples
/// ```
/// use wordle_core::core::{Letter, Word};
/// use wordle_core::game::{Game, GameStatus};
///
/// let mut game = Game::new(Word::new("BUNNY").unwrap());
/// for c in "BUNNY".chars() {
///     game.append_char(Letter::new(c).unwrap());
/// }
///
/// let scored = game.submit_guess().unwrap();
/// assert!(scored.is_solved());
/// assert_eq!(game.status(), GameStatus::Won);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    target: Word,
    past_guesses: Vec<Word>,
    buffer: Vec<Letter>,
    status: GameStatus,
}

impl Game {
    /// Start a game with empty history and an empty buffer
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            past_guesses: Vec::with_capacity(MAX_GUESSES),
            buffer: Vec::with_capacity(WORD_LENGTH),
            status: GameStatus::InProgress,
        }
    }

    /// Add a letter to the buffer
    ///
    /// Ignored once the game is over or when the buffer already holds five
    /// letters.
    pub fn append_char(&mut self, letter: Letter) {
        if self.is_over() || self.buffer.len() >= WORD_LENGTH {
            trace!(%letter, "letter ignored");
            return;
        }
        self.buffer.push(letter);
        trace!(%letter, len = self.buffer.len(), "letter appended");
    }

    /// Remove the last letter of the buffer
    ///
    /// Ignored once the game is over or when the buffer is empty.
    pub fn backspace(&mut self) {
        if self.is_over() {
            return;
        }
        if let Some(letter) = self.buffer.pop() {
            trace!(%letter, len = self.buffer.len(), "letter removed");
        }
    }

    /// Submit the buffer as a guess
    ///
    /// On success the guess is appended to the history, the buffer is
    /// cleared and the status is re-evaluated from the scored guess alone:
    /// all-correct wins, otherwise the sixth guess loses.
    ///
    /// # Errors
    /// Returns [`RejectedGuess`] without changing any state if the game is
    /// over, the guess budget is spent, or the buffer does not hold exactly
    /// five letters.
    pub fn submit_guess(&mut self) -> Result<ScoredGuess, RejectedGuess> {
        let rejection = if self.is_over() {
            Some(RejectedGuess::GameOver)
        } else if self.past_guesses.len() >= MAX_GUESSES {
            Some(RejectedGuess::OutOfGuesses)
        } else if self.buffer.len() != WORD_LENGTH {
            Some(RejectedGuess::Incomplete {
                len: self.buffer.len(),
            })
        } else {
            None
        };
        if let Some(rejection) = rejection {
            debug!(%rejection, "guess rejected");
            return Err(rejection);
        }

        let mut letters = [Letter::A; WORD_LENGTH];
        letters.copy_from_slice(&self.buffer);
        let guess = Word::from(letters);

        self.past_guesses.push(guess);
        self.buffer.clear();

        let scored = ScoredGuess::calculate(&guess, &self.target);
        if scored.is_solved() {
            self.status = GameStatus::Won;
        } else if self.past_guesses.len() == MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        debug!(
            %guess,
            result = %scored.to_emoji(),
            attempt = self.past_guesses.len(),
            status = ?self.status,
            "guess accepted"
        );
        Ok(scored)
    }

    /// Dispatch one keyboard input
    ///
    /// Returns the scored guess when `input` was a successful submit.
    ///
    /// # Errors
    /// Propagates [`RejectedGuess`] from [`submit_guess`](Self::submit_guess).
    pub fn handle(&mut self, input: Input) -> Result<Option<ScoredGuess>, RejectedGuess> {
        match input {
            Input::Char(letter) => self.append_char(letter),
            Input::Backspace => self.backspace(),
            Input::Enter => return self.submit_guess().map(Some),
        }
        Ok(None)
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Submitted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn past_guesses(&self) -> &[Word] {
        &self.past_guesses
    }

    /// Letters typed for the guess in progress
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &[Letter] {
        &self.buffer
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.past_guesses.len()
    }

    /// Every past guess scored against the target, oldest first
    #[must_use]
    pub fn scored_guesses(&self) -> Vec<ScoredGuess> {
        self.past_guesses
            .iter()
            .map(|guess| ScoredGuess::calculate(guess, &self.target))
            .collect()
    }

    /// Score of the most recent guess, if any
    #[must_use]
    pub fn last_score(&self) -> Option<ScoredGuess> {
        self.past_guesses
            .last()
            .map(|guess| ScoredGuess::calculate(guess, &self.target))
    }

    /// Best verdict seen so far for each guessed letter
    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        KeyboardHints::from_scored(&self.scored_guesses())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(target: &str) -> Game {
        Game::new(Word::new(target).unwrap())
    }

    fn type_word(game: &mut Game, text: &str) {
        for c in text.chars() {
            game.append_char(Letter::new(c).unwrap());
        }
    }

    fn guess(game: &mut Game, text: &str) -> Result<ScoredGuess, RejectedGuess> {
        type_word(game, text);
        game.submit_guess()
    }

    fn buffer_text(game: &Game) -> String {
        game.buffer().iter().map(|l| l.as_char()).collect()
    }

    #[test]
    fn new_game_is_empty_and_in_progress() {
        let game = game("BUNNY");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_over());
        assert!(game.past_guesses().is_empty());
        assert!(game.buffer().is_empty());
        assert_eq!(game.guesses_remaining(), MAX_GUESSES);
        assert_eq!(game.target().to_string(), "BUNNY");
        assert!(game.last_score().is_none());
    }

    #[test]
    fn append_char_stops_at_five_letters() {
        let mut game = game("BUNNY");
        type_word(&mut game, "WHALES");
        assert_eq!(buffer_text(&game), "WHALE");
        type_word(&mut game, "X");
        assert_eq!(game.buffer().len(), WORD_LENGTH);
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut game = game("BUNNY");
        type_word(&mut game, "WHA");
        game.backspace();
        assert_eq!(buffer_text(&game), "WH");
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let mut game = game("BUNNY");
        game.backspace();
        assert!(game.buffer().is_empty());
        assert_eq!(game, self::game("BUNNY"));
    }

    #[test]
    fn submit_incomplete_guess_is_rejected_without_change() {
        let mut game = game("BUNNY");
        type_word(&mut game, "WHAL");
        let before = game.clone();

        assert_eq!(
            game.submit_guess(),
            Err(RejectedGuess::Incomplete { len: 4 })
        );
        assert_eq!(game, before);
        assert_eq!(buffer_text(&game), "WHAL");
        assert!(game.past_guesses().is_empty());
    }

    #[test]
    fn submit_appends_and_clears_buffer() {
        let mut game = game("BUNNY");
        let scored = guess(&mut game, "WHALE").unwrap();

        assert_eq!(scored.word().to_string(), "WHALE");
        assert_eq!(game.past_guesses().len(), 1);
        assert!(game.buffer().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.guesses_remaining(), MAX_GUESSES - 1);
        assert_eq!(game.last_score(), Some(scored));
    }

    #[test]
    fn six_misses_lose_the_game() {
        let mut game = game("BUNNY");
        for attempt in 1..=MAX_GUESSES {
            guess(&mut game, "WHALE").unwrap();
            assert_eq!(game.is_over(), attempt == MAX_GUESSES);
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert!(!game.is_won());
        assert_eq!(game.guesses_remaining(), 0);
    }

    #[test]
    fn exact_match_wins_immediately() {
        let mut game = game("BUNNY");
        guess(&mut game, "WHALE").unwrap();
        guess(&mut game, "NYBUN").unwrap();
        let scored = guess(&mut game, "BUNNY").unwrap();

        assert!(scored.is_solved());
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_won());
        assert_eq!(game.guesses_remaining(), 3);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut game = game("BUNNY");
        for _ in 1..MAX_GUESSES {
            guess(&mut game, "WHALE").unwrap();
        }
        guess(&mut game, "BUNNY").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn finished_game_ignores_input() {
        let mut game = game("BUNNY");
        guess(&mut game, "BUNNY").unwrap();
        let before = game.clone();

        type_word(&mut game, "WHALE");
        game.backspace();
        assert_eq!(game.submit_guess(), Err(RejectedGuess::GameOver));
        assert_eq!(game, before);
        assert!(game.buffer().is_empty());
    }

    #[test]
    fn lost_game_rejects_further_guesses() {
        let mut game = game("BUNNY");
        for _ in 0..MAX_GUESSES {
            guess(&mut game, "WHALE").unwrap();
        }
        assert_eq!(guess(&mut game, "BUNNY"), Err(RejectedGuess::GameOver));
        assert_eq!(game.past_guesses().len(), MAX_GUESSES);
    }

    #[test]
    fn scored_guesses_follow_history() {
        let mut game = game("BUNNY");
        guess(&mut game, "WHALE").unwrap();
        guess(&mut game, "NYBUN").unwrap();

        let rows: Vec<String> = game.scored_guesses().iter().map(ScoredGuess::to_emoji).collect();
        assert_eq!(rows, ["⬜⬜⬜⬜⬜", "🟨🟨🟨🟨🟨"]);
    }

    #[test]
    fn handle_dispatches_inputs() {
        let mut game = game("BUNNY");
        for c in "BUNNX".chars() {
            assert_eq!(game.handle(Input::Char(Letter::new(c).unwrap())), Ok(None));
        }
        assert_eq!(game.handle(Input::Backspace), Ok(None));
        assert_eq!(game.handle(Input::Enter), Err(RejectedGuess::Incomplete { len: 4 }));
        game.handle(Input::Char(Letter::new('Y').unwrap())).unwrap();

        let scored = game.handle(Input::Enter).unwrap().unwrap();
        assert!(scored.is_solved());
        assert!(game.is_over());
    }

    #[test]
    fn status_terminal_states() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
