//! # Keypad Expression Evaluator
//!
//! The standard calculator is a small state machine driven by discrete key
//! presses. Operands and operators accumulate in a token stream; `=` reduces
//! the stream strictly left to right (see [`reduce`]).
//!
//! ## State
//!
//! ```text
//! EvaluatorState
//! ├── tokens: Vec<Token>         operand / operator stream, never starts with an operator
//! ├── display: String            operand being typed or last result
//! ├── awaiting_operand: bool     next digit starts a new operand
//! ├── just_evaluated: bool       next digit starts a new expression
//! ├── last_error: Option<..>     shown as the error indicator
//! └── history: History           "5 + 3 = 8", newest first
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::evaluator::{EvaluatorState, Operator};
//!
//! let mut calc = EvaluatorState::new();
//! calc.input_digit(5);
//! calc.input_operator(Operator::Add);
//! calc.input_digit(3);
//!
//! assert_eq!(calc.evaluate().unwrap(), Some(8.0));
//! assert_eq!(calc.display(), "8");
//! assert_eq!(calc.history().latest().unwrap().text(), "5 + 3 = 8");
//! ```

pub mod reduce;
pub mod token;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::{format_display_text, format_number};
use crate::history::History;
use crate::settings::{CalculatorSettings, DisplayOptions};

pub use reduce::reduce;
pub use token::{Operator, Token};

/// Text shown in place of the display value after a failed evaluation
pub const ERROR_INDICATOR: &str = "Error";

/// Session state of the keypad calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorState {
    tokens: Vec<Token>,
    display: String,
    awaiting_operand: bool,
    just_evaluated: bool,
    last_expression: Option<String>,
    last_error: Option<CalcError>,
    history: History,
    display_options: DisplayOptions,
}

impl Default for EvaluatorState {
    fn default() -> Self {
        EvaluatorState::new()
    }
}

impl EvaluatorState {
    /// Create an evaluator with default settings.
    pub fn new() -> Self {
        EvaluatorState::with_settings(&CalculatorSettings::default())
    }

    /// Create an evaluator using the history capacity and display options
    /// from `settings`.
    pub fn with_settings(settings: &CalculatorSettings) -> Self {
        EvaluatorState {
            tokens: Vec::new(),
            display: "0".to_string(),
            awaiting_operand: false,
            just_evaluated: false,
            last_expression: None,
            last_error: None,
            history: History::with_capacity(settings.history_capacity),
            display_options: settings.display,
        }
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Enter a digit (`0..=9`).
    ///
    /// Starts a new operand after an operator or a completed evaluation,
    /// otherwise extends the current operand, replacing a lone `0`.
    /// Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) -> &str {
        let Some(d) = char::from_digit(u32::from(digit), 10) else {
            tracing::warn!(digit, "ignoring non-decimal digit");
            return self.display();
        };
        self.last_error = None;

        if self.awaiting_operand || self.just_evaluated {
            self.start_operand(d.to_string());
        } else if let Some(operand) = trailing_operand(&mut self.tokens) {
            if operand == "0" {
                operand.clear();
            }
            operand.push(d);
            self.display = operand.clone();
        } else {
            let mut operand = if self.display == "0" {
                String::new()
            } else {
                self.display.clone()
            };
            operand.push(d);
            self.tokens.push(Token::Operand(operand.clone()));
            self.display = operand;
        }

        self.display()
    }

    /// Enter a decimal point.
    ///
    /// Ignored when the current operand already has one; after an operator or
    /// a completed evaluation a new operand `0.` is started.
    pub fn input_decimal_point(&mut self) -> &str {
        self.last_error = None;

        if self.awaiting_operand || self.just_evaluated {
            self.start_operand("0.".to_string());
        } else if let Some(operand) = trailing_operand(&mut self.tokens) {
            if !operand.contains('.') {
                operand.push('.');
                self.display = operand.clone();
            }
        } else if !self.display.contains('.') {
            let operand = format!("{}.", self.display);
            self.tokens.push(Token::Operand(operand.clone()));
            self.display = operand;
        }

        self.display()
    }

    /// Append a binary operator.
    ///
    /// Right after an evaluation the new expression starts from the result.
    /// On an empty stream the current display value becomes the first operand.
    pub fn input_operator(&mut self, op: Operator) -> &str {
        self.last_error = None;

        if self.just_evaluated {
            self.tokens.clear();
            self.just_evaluated = false;
        }
        if self.tokens.is_empty() {
            self.tokens.push(Token::Operand(self.display.clone()));
        }

        self.tokens.push(Token::Operator(op));
        self.awaiting_operand = true;
        self.display()
    }

    /// Reset the stream, display and flags. History is kept.
    pub fn clear(&mut self) -> &str {
        self.tokens.clear();
        self.display = "0".to_string();
        self.awaiting_operand = false;
        self.just_evaluated = false;
        self.last_expression = None;
        self.last_error = None;
        self.display()
    }

    /// Negate the most recently entered operand in place.
    pub fn toggle_sign(&mut self) -> &str {
        self.transform_trailing_operand(|v| -v)
    }

    /// Divide the most recently entered operand by 100 in place.
    pub fn percent(&mut self) -> &str {
        self.transform_trailing_operand(|v| v / 100.0)
    }

    /// Reduce the stream.
    ///
    /// Returns `Ok(None)` without touching any state when the stream is empty.
    /// On success the result replaces the display, a history entry is added
    /// and the next digit starts a new expression. On failure the stream is
    /// kept as it was, the display shows [`ERROR_INDICATOR`] and no history
    /// entry is added.
    pub fn evaluate(&mut self) -> CalcResult<Option<f64>> {
        if self.tokens.is_empty() {
            tracing::debug!("evaluate on empty expression ignored");
            return Ok(None);
        }

        let expression = self.stream_text();
        match reduce(&self.tokens) {
            Ok(value) => {
                let result = format_number(value);
                let record = format!("{} = {}", expression, result);
                tracing::debug!(%record, "expression evaluated");

                self.history.push(record.clone());
                self.last_expression = Some(record);
                self.display = result;
                self.tokens.clear();
                self.awaiting_operand = false;
                self.just_evaluated = true;
                self.last_error = None;
                Ok(Some(value))
            }
            Err(err) => {
                tracing::warn!(%expression, error = %err, "expression evaluation failed");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    // =========================================================================
    // Read-only view
    // =========================================================================

    /// Raw display text (`"0."`, `"12"`, `"8"`), or [`ERROR_INDICATOR`] after a
    /// failed evaluation.
    pub fn display(&self) -> &str {
        if self.last_error.is_some() {
            ERROR_INDICATOR
        } else {
            &self.display
        }
    }

    /// Display text grouped and rounded for presentation (`"1,234.5"`).
    pub fn formatted_display(&self) -> String {
        format_display_text(
            self.display(),
            self.display_options.max_fraction_digits,
            &self.display_options.locale,
        )
    }

    /// The expression being built (`"5 + 3"`), or the last completed one
    /// (`"5 + 3 = 8"`) right after an evaluation.
    pub fn expression_line(&self) -> String {
        if !self.tokens.is_empty() {
            return self.stream_text();
        }
        match (&self.last_expression, self.just_evaluated) {
            (Some(record), true) => record.clone(),
            _ => String::new(),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn is_just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Error from the most recent evaluation, cleared by the next input
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn start_operand(&mut self, operand: String) {
        self.tokens.push(Token::Operand(operand.clone()));
        self.display = operand;
        self.awaiting_operand = false;
        self.just_evaluated = false;
    }

    /// Apply `f` to the trailing operand, or only to the display value when
    /// the stream has no trailing operand (empty, or ends with an operator).
    fn transform_trailing_operand(&mut self, f: impl Fn(f64) -> f64) -> &str {
        self.last_error = None;

        if let Some(operand) = trailing_operand(&mut self.tokens) {
            if let Ok(value) = operand.parse::<f64>() {
                let text = format_number(f(value));
                *operand = text.clone();
                self.display = text;
            }
        } else if let Ok(value) = self.display.parse::<f64>() {
            self.display = format_number(f(value));
        }

        self.display()
    }

    fn stream_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trailing operand of the stream, if the stream ends with one
fn trailing_operand(tokens: &mut [Token]) -> Option<&mut String> {
    match tokens.last_mut() {
        Some(Token::Operand(text)) => Some(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed keypad-style input: digits, `.`, operators.
    fn type_in(calc: &mut EvaluatorState, input: &str) {
        for c in input.chars() {
            match c {
                '0'..='9' => {
                    calc.input_digit(c as u8 - b'0');
                }
                '.' => {
                    calc.input_decimal_point();
                }
                _ => {
                    calc.input_operator(Operator::from_char(c).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_simple_addition() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "5+3");
        assert_eq!(calc.evaluate().unwrap(), Some(8.0));
        assert_eq!(calc.display(), "8");
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.history().get(0).unwrap().text(), "5 + 3 = 8");
        assert_eq!(calc.expression_line(), "5 + 3 = 8");
    }

    #[test]
    fn test_left_to_right_order() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "2+3x4");
        assert_eq!(calc.evaluate().unwrap(), Some(20.0));
        assert_eq!(calc.history().latest().unwrap().text(), "2 + 3 × 4 = 20");
    }

    #[test]
    fn test_multi_digit_and_leading_zero() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "007");
        assert_eq!(calc.display(), "7");
        type_in(&mut calc, "12");
        assert_eq!(calc.display(), "712");
    }

    #[test]
    fn test_lone_zero_replaced_after_operator() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "5+03");
        assert_eq!(calc.expression_line(), "5 + 3");
        assert_eq!(calc.evaluate().unwrap(), Some(8.0));
    }

    #[test]
    fn test_decimal_point_rules() {
        let mut calc = EvaluatorState::new();
        calc.input_decimal_point();
        assert_eq!(calc.display(), "0.");
        type_in(&mut calc, "5.2.");
        assert_eq!(calc.display(), "0.52");

        type_in(&mut calc, "+.");
        assert_eq!(calc.display(), "0.");
        type_in(&mut calc, "5");
        assert_eq!(calc.evaluate().unwrap(), Some(0.52 + 0.5));
    }

    #[test]
    fn test_decimal_after_evaluation_starts_new_operand() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "1+1");
        calc.evaluate().unwrap();
        calc.input_decimal_point();
        assert_eq!(calc.display(), "0.");
        assert_eq!(calc.tokens(), &[Token::Operand("0.".to_string())]);
    }

    #[test]
    fn test_digit_after_evaluation_starts_new_expression() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "5+3");
        calc.evaluate().unwrap();
        type_in(&mut calc, "2");
        assert_eq!(calc.display(), "2");
        assert_eq!(calc.expression_line(), "2");
    }

    #[test]
    fn test_operator_after_evaluation_continues_from_result() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "5+3");
        calc.evaluate().unwrap();
        type_in(&mut calc, "x2");
        assert_eq!(calc.expression_line(), "8 × 2");
        assert_eq!(calc.evaluate().unwrap(), Some(16.0));
        assert_eq!(calc.history().latest().unwrap().text(), "8 × 2 = 16");
    }

    #[test]
    fn test_operator_on_empty_stream_seeds_display() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "-4");
        assert_eq!(calc.tokens()[0], Token::Operand("0".to_string()));
        assert_eq!(calc.evaluate().unwrap(), Some(-4.0));
    }

    #[test]
    fn test_toggle_sign_only_touches_trailing_operand() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "10-4");
        calc.toggle_sign();
        assert_eq!(calc.display(), "-4");
        assert_eq!(calc.expression_line(), "10 - -4");
        assert_eq!(calc.evaluate().unwrap(), Some(14.0));
    }

    #[test]
    fn test_percent_only_touches_trailing_operand() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "200x5");
        calc.percent();
        assert_eq!(calc.display(), "0.05");
        assert_eq!(calc.evaluate().unwrap(), Some(10.0));
    }

    #[test]
    fn test_toggle_sign_after_evaluation_changes_result() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "5+3");
        calc.evaluate().unwrap();
        calc.toggle_sign();
        assert_eq!(calc.display(), "-8");
        type_in(&mut calc, "+1");
        assert_eq!(calc.evaluate().unwrap(), Some(-7.0));
    }

    #[test]
    fn test_toggle_sign_while_awaiting_operand_leaves_stream() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "5+");
        calc.toggle_sign();
        assert_eq!(calc.display(), "-5");
        assert_eq!(calc.expression_line(), "5 +");
    }

    #[test]
    fn test_division_by_zero_is_error_value() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "6/0");
        let err = calc.evaluate().unwrap_err();
        assert_eq!(err.error_code(), "ARITHMETIC_FAILURE");
        assert_eq!(calc.display(), ERROR_INDICATOR);
        assert!(calc.history().is_empty());
        // The stream is left as typed
        assert_eq!(calc.expression_line(), "6 / 0");
    }

    #[test]
    fn test_recovery_after_failed_evaluation() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "6/0");
        assert!(calc.evaluate().is_err());
        type_in(&mut calc, "2");
        assert!(calc.last_error().is_none());
        assert_eq!(calc.expression_line(), "6 / 2");
        assert_eq!(calc.evaluate().unwrap(), Some(3.0));
    }

    #[test]
    fn test_trailing_operator_is_invalid_input() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "5+");
        let err = calc.evaluate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        type_in(&mut calc, "1");
        assert_eq!(calc.evaluate().unwrap(), Some(6.0));
    }

    #[test]
    fn test_clear_then_evaluate_is_noop() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "5+3");
        calc.evaluate().unwrap();
        type_in(&mut calc, "9x");
        calc.clear();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.evaluate().unwrap(), None);
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.expression_line(), "");
    }

    #[test]
    fn test_repeated_equals_is_noop() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "2x3");
        assert_eq!(calc.evaluate().unwrap(), Some(6.0));
        assert_eq!(calc.evaluate().unwrap(), None);
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.display(), "6");
    }

    #[test]
    fn test_history_is_bounded() {
        let mut calc = EvaluatorState::new();
        for i in 0..11u8 {
            calc.input_digit(i % 10);
            calc.input_operator(Operator::Add);
            calc.input_digit(1);
            calc.evaluate().unwrap();
        }
        assert_eq!(calc.history().len(), 10);
        assert_eq!(calc.history().get(0).unwrap().text(), "0 + 1 = 1");
        assert_eq!(calc.history().get(9).unwrap().text(), "1 + 1 = 2");
    }

    #[test]
    fn test_formatted_display() {
        let mut calc = EvaluatorState::new();
        type_in(&mut calc, "1234567.5");
        assert_eq!(calc.formatted_display(), "1,234,567.5");
        calc.clear();
        type_in(&mut calc, ".1+.2");
        calc.evaluate().unwrap();
        assert_eq!(calc.display(), "0.30000000000000004");
        assert_eq!(calc.formatted_display(), "0.3");
    }

    #[test]
    fn test_ignores_out_of_range_digit() {
        let mut calc = EvaluatorState::new();
        assert_eq!(calc.input_digit(12), "0");
        assert!(calc.tokens().is_empty());
    }

    #[test]
    fn test_settings_capacity() {
        let settings = CalculatorSettings {
            history_capacity: 2,
            ..CalculatorSettings::default()
        };
        let mut calc = EvaluatorState::with_settings(&settings);
        for _ in 0..3 {
            type_in(&mut calc, "1+1");
            calc.evaluate().unwrap();
        }
        assert_eq!(calc.history().len(), 2);
    }
}
