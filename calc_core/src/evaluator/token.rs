//! Operators and tokens of the keypad expression stream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Binary operators available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Recognize an operator from a single character.
    ///
    /// Multiplication accepts `×`, `x`, `X` and `*`; division accepts `/` and
    /// `÷`; subtraction accepts `-` and the minus sign `−`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '×' | 'x' | 'X' | '*' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Symbol used in the expression line and history records
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "/",
        }
    }

    /// Name used in error reports
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Subtract => "subtraction",
            Operator::Multiply => "multiplication",
            Operator::Divide => "division",
        }
    }

    /// Apply the operator.
    ///
    /// Division by zero and any non-finite result are arithmetic failures.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let value = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::arithmetic_failure(self.name(), "Division by zero"));
                }
                lhs / rhs
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::arithmetic_failure(
                self.name(),
                "Result is not a finite number",
            ))
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_char(c)
                .ok_or_else(|| CalcError::invalid_input("operator", s, "Unknown operator")),
            _ => Err(CalcError::invalid_input("operator", s, "Expected a single operator symbol")),
        }
    }
}

/// One element of the expression stream.
///
/// Operands keep the text exactly as typed (`"0."`, `"12.50"`) so the display
/// can echo it; they are parsed only when the stream is reduced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Token {
    Operand(String),
    Operator(Operator),
}

impl Token {
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Operand(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(text) => f.write_str(text),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplication_aliases() {
        for c in ['×', 'x', 'X', '*'] {
            assert_eq!(Operator::from_char(c), Some(Operator::Multiply));
        }
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Multiply);
        assert!("%".parse::<Operator>().is_err());
        assert!("++".parse::<Operator>().is_err());
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0).unwrap(), 8.0);
        assert_eq!(Operator::Subtract.apply(5.0, 3.0).unwrap(), 2.0);
        assert_eq!(Operator::Multiply.apply(5.0, 3.0).unwrap(), 15.0);
        assert_eq!(Operator::Divide.apply(6.0, 3.0).unwrap(), 2.0);
    }

    #[test]
    fn test_division_by_zero_is_reported() {
        let err = Operator::Divide.apply(6.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "ARITHMETIC_FAILURE");
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(Operator::Multiply.apply(f64::MAX, 10.0).is_err());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Operand("0.".to_string()).to_string(), "0.");
        assert_eq!(Token::Operator(Operator::Multiply).to_string(), "×");
    }
}
