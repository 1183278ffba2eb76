//! Keyboard inputs accepted by a game

use crate::core::Letter;
use std::iter;

/// One key press from an on-screen or physical keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Char(Letter),
    Backspace,
    Enter,
}

impl Input {
    /// Map a typed key to an input
    ///
    /// Letters are folded to uppercase; `<`, backspace and delete erase;
    /// carriage return and newline submit. Any other key is ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_core::core::Letter;
    /// use wordle_core::game::Input;
    ///
    /// assert_eq!(Input::from_key('b'), Some(Input::Char(Letter::new('B').unwrap())));
    /// assert_eq!(Input::from_key('<'), Some(Input::Backspace));
    /// assert_eq!(Input::from_key('\n'), Some(Input::Enter));
    /// assert_eq!(Input::from_key('7'), None);
    /// ```
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '\n' | '\r' => Some(Self::Enter),
            '<' | '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            c => Letter::new(c.to_ascii_uppercase()).ok().map(Self::Char),
        }
    }

    /// Inputs for one line of typed text, ending with a submit
    pub fn from_line(line: &str) -> impl Iterator<Item = Self> + '_ {
        line.trim_end_matches(['\r', '\n'])
            .chars()
            .filter_map(Self::from_key)
            .chain(iter::once(Self::Enter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Input {
        Input::Char(Letter::new(c).unwrap())
    }

    #[test]
    fn from_key_folds_case() {
        assert_eq!(Input::from_key('q'), Some(letter('Q')));
        assert_eq!(Input::from_key('Q'), Some(letter('Q')));
    }

    #[test]
    fn from_key_ignores_non_letters() {
        for key in ['1', ' ', '!', 'é', '\t'] {
            assert_eq!(Input::from_key(key), None);
        }
    }

    #[test]
    fn from_key_special_keys() {
        assert_eq!(Input::from_key('\r'), Some(Input::Enter));
        assert_eq!(Input::from_key('\u{8}'), Some(Input::Backspace));
        assert_eq!(Input::from_key('\u{7f}'), Some(Input::Backspace));
    }

    #[test]
    fn from_line_ends_with_single_enter() {
        let inputs: Vec<Input> = Input::from_line("ab<c\r\n").collect();
        assert_eq!(
            inputs,
            [letter('A'), letter('B'), Input::Backspace, letter('C'), Input::Enter]
        );
    }

    #[test]
    fn from_line_empty_is_just_enter() {
        let inputs: Vec<Input> = Input::from_line("").collect();
        assert_eq!(inputs, [Input::Enter]);
    }
}
