//! # Keypad
//!
//! The button grid of the standard calculator and the mapping from a pressed
//! key to an [`EvaluatorState`] operation.
//!
//! ```text
//! AC  +/-  %   /
//! 7   8    9   ×
//! 4   5    6   -
//! 1   2    3   +
//! 0 (wide) .   =
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::evaluator::{EvaluatorState, Operator};

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit `0..=9`
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    /// `AC`
    Clear,
    /// `+/-`
    ToggleSign,
    Percent,
}

/// Visual grouping of keys; the GUI styles each role differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyRole {
    Number,
    Function,
    Operator,
    Equals,
}

/// Button rows, top to bottom.
pub const KEYPAD_LAYOUT: [&[Key]; 5] = [
    &[Key::Clear, Key::ToggleSign, Key::Percent, Key::Operator(Operator::Divide)],
    &[Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Operator(Operator::Multiply)],
    &[Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Operator(Operator::Subtract)],
    &[Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Operator(Operator::Add)],
    &[Key::Digit(0), Key::DecimalPoint, Key::Equals],
];

impl Key {
    /// Label printed on the button
    pub fn label(self) -> &'static str {
        match self {
            Key::Digit(d) => DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?"),
            Key::DecimalPoint => ".",
            Key::Operator(op) => op.symbol(),
            Key::Equals => "=",
            Key::Clear => "AC",
            Key::ToggleSign => "+/-",
            Key::Percent => "%",
        }
    }

    /// Parse a button label (`"7"`, `"AC"`, `"+/-"`, `"x"`, ...).
    pub fn parse(label: &str) -> Option<Key> {
        match label.trim() {
            "AC" | "C" => Some(Key::Clear),
            "+/-" | "±" => Some(Key::ToggleSign),
            "%" => Some(Key::Percent),
            "=" => Some(Key::Equals),
            "." => Some(Key::DecimalPoint),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Map a typed character to a key.
    ///
    /// Besides the button labels this accepts `c`/`C` for clear, `n` for the
    /// sign toggle and the multiplication aliases of [`Operator::from_char`].
    pub fn from_char(c: char) -> Option<Key> {
        if let Some(d) = c.to_digit(10) {
            return Some(Key::Digit(d as u8));
        }
        match c {
            '.' => Some(Key::DecimalPoint),
            '=' => Some(Key::Equals),
            '%' => Some(Key::Percent),
            'c' | 'C' => Some(Key::Clear),
            'n' | '±' => Some(Key::ToggleSign),
            _ => Operator::from_char(c).map(Key::Operator),
        }
    }

    pub fn role(self) -> KeyRole {
        match self {
            Key::Digit(_) | Key::DecimalPoint => KeyRole::Number,
            Key::Clear | Key::ToggleSign | Key::Percent => KeyRole::Function,
            Key::Operator(_) => KeyRole::Operator,
            Key::Equals => KeyRole::Equals,
        }
    }

    /// The zero key spans two columns
    pub fn is_wide(self) -> bool {
        self == Key::Digit(0)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl EvaluatorState {
    /// Dispatch one key press.
    ///
    /// Only [`Key::Equals`] can produce a value or an error; every other key
    /// returns `Ok(None)`.
    pub fn press(&mut self, key: Key) -> CalcResult<Option<f64>> {
        tracing::trace!(key = key.label(), "key pressed");
        match key {
            Key::Digit(d) => {
                self.input_digit(d);
            }
            Key::DecimalPoint => {
                self.input_decimal_point();
            }
            Key::Operator(op) => {
                self.input_operator(op);
            }
            Key::Equals => return self.evaluate(),
            Key::Clear => {
                self.clear();
            }
            Key::ToggleSign => {
                self.toggle_sign();
            }
            Key::Percent => {
                self.percent();
            }
        }
        Ok(None)
    }

    /// Press the key for every non-whitespace character of `input`.
    ///
    /// Stops at the first character that is not a key, or at the first failed
    /// evaluation. Returns the outcome of the last `=` pressed.
    ///
    /// ```rust
    /// use calc_core::evaluator::EvaluatorState;
    ///
    /// let mut calc = EvaluatorState::new();
    /// assert_eq!(calc.press_sequence("12 x 3 =").unwrap(), Some(36.0));
    /// assert!(calc.press_sequence("6/0=").is_err());
    /// ```
    pub fn press_sequence(&mut self, input: &str) -> CalcResult<Option<f64>> {
        let mut outcome = None;
        for c in input.chars().filter(|c| !c.is_whitespace()) {
            let key = Key::from_char(c).ok_or_else(|| {
                CalcError::invalid_input("key", c.to_string(), "Not a keypad key")
            })?;
            if let Some(value) = self.press(key)? {
                outcome = Some(value);
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_shape() {
        assert_eq!(KEYPAD_LAYOUT.len(), 5);
        let total: usize = KEYPAD_LAYOUT.iter().map(|row| row.len()).sum();
        assert_eq!(total, 19);
        assert!(KEYPAD_LAYOUT[4][0].is_wide());
    }

    #[test]
    fn test_label_roundtrip() {
        for row in KEYPAD_LAYOUT {
            for key in row {
                assert_eq!(Key::parse(key.label()), Some(*key), "{}", key);
            }
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Key::parse("x"), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::parse("±"), Some(Key::ToggleSign));
        assert_eq!(Key::parse("sqrt"), None);
    }

    #[test]
    fn test_roles() {
        assert_eq!(Key::Digit(3).role(), KeyRole::Number);
        assert_eq!(Key::Percent.role(), KeyRole::Function);
        assert_eq!(Key::Operator(Operator::Add).role(), KeyRole::Operator);
        assert_eq!(Key::Equals.role(), KeyRole::Equals);
    }

    #[test]
    fn test_press_sequence() {
        let mut calc = EvaluatorState::new();
        assert_eq!(calc.press_sequence("5+3=").unwrap(), Some(8.0));
        assert_eq!(calc.history().latest().unwrap().text(), "5 + 3 = 8");

        assert_eq!(calc.press_sequence("c").unwrap(), None);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_press_sequence_function_keys() {
        let mut calc = EvaluatorState::new();
        assert_eq!(calc.press_sequence("50%").unwrap(), None);
        assert_eq!(calc.display(), "0.5");
        assert_eq!(calc.press_sequence("n").unwrap(), None);
        assert_eq!(calc.display(), "-0.5");
    }

    #[test]
    fn test_press_sequence_rejects_unknown_keys() {
        let mut calc = EvaluatorState::new();
        let err = calc.press_sequence("2^3").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_minus_after_operator_is_a_sign() {
        let mut calc = EvaluatorState::new();
        assert_eq!(calc.press_sequence("5x-3=").unwrap(), Some(-15.0));
        assert_eq!(calc.history().latest().unwrap().text(), "5 × - 3 = -15");
    }

    #[test]
    fn test_division_by_zero_via_keys() {
        let mut calc = EvaluatorState::new();
        let err = calc.press_sequence("6/0=").unwrap_err();
        assert_eq!(err.error_code(), "ARITHMETIC_FAILURE");
        assert_eq!(calc.display(), "Error");
    }
}
