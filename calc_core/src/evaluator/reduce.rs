//! Left-to-right reduction of a token stream.
//!
//! There is no operator precedence: each operator is applied to the running
//! value as soon as its right operand is read, so `2 + 3 × 4` is `(2 + 3) × 4`.

use crate::errors::{CalcError, CalcResult};

use super::token::{Operator, Token};

/// Reduce `operand (operator operand)*` to a single value.
///
/// A `-` directly after another operator is a sign on the following operand.
/// Returns `InvalidInput` for an empty stream, a stream that starts or ends
/// with an operator, any other pair of adjacent operators or an operand that
/// is not a number, and `ArithmeticFailure` when an operator cannot be applied.
pub fn reduce(tokens: &[Token]) -> CalcResult<f64> {
    let mut iter = tokens.iter();

    let mut acc = match iter.next() {
        Some(Token::Operand(text)) => parse_operand(text)?,
        Some(Token::Operator(op)) => {
            return Err(malformed(op.symbol(), "Expression cannot start with an operator"));
        }
        None => return Err(malformed("", "Expression is empty")),
    };

    while let Some(token) = iter.next() {
        let op = match token {
            Token::Operator(op) => *op,
            Token::Operand(text) => {
                return Err(malformed(text, "Expected an operator between operands"));
            }
        };

        let rhs = match iter.next() {
            Some(Token::Operand(text)) => parse_operand(text)?,
            // `5 × - 3`: a minus right after an operator negates the operand
            Some(Token::Operator(Operator::Subtract)) => match iter.next() {
                Some(Token::Operand(text)) => -parse_operand(text)?,
                Some(Token::Operator(next)) => {
                    return Err(malformed(
                        format!("{}-{}", op.symbol(), next.symbol()),
                        "Too many operators in a row",
                    ));
                }
                None => return Err(malformed("-", "Expression ends with an operator")),
            },
            Some(Token::Operator(next)) => {
                return Err(malformed(
                    format!("{}{}", op.symbol(), next.symbol()),
                    "Two operators in a row",
                ));
            }
            None => return Err(malformed(op.symbol(), "Expression ends with an operator")),
        };

        acc = op.apply(acc, rhs)?;
    }

    Ok(acc)
}

fn parse_operand(text: &str) -> CalcResult<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| malformed(text, "Operand is not a number"))?;
    if !value.is_finite() {
        return Err(malformed(text, "Operand is not a finite number"));
    }
    Ok(value)
}

fn malformed(value: impl Into<String>, reason: &str) -> CalcError {
    CalcError::invalid_input("expression", value, reason)
}
