//! # Error Types
//!
//! Structured error types for calc_core. Every failure in the calculator is a
//! value returned to the caller, never a panic: the keypad shows an error
//! indicator and the quadratic form shows a message, and both keep running.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_divide(lhs: f64, rhs: f64) -> CalcResult<f64> {
//!     if rhs == 0.0 {
//!         return Err(CalcError::arithmetic_failure("division", "Division by zero"));
//!     }
//!     Ok(lhs / rhs)
//! }
//!
//! assert_eq!(checked_divide(6.0, 0.0).unwrap_err().error_code(), "ARITHMETIC_FAILURE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// Each condition maps to exactly one variant so that callers can pick their
/// own wording; [`CalcError::user_message`] provides the default wording.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Non-numeric coefficient or malformed expression token sequence
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The leading coefficient of a quadratic is zero
    #[error("Degenerate equation: a = {a}, equation is not quadratic")]
    DegenerateEquation { a: String },

    /// Division by zero or an otherwise unevaluable reduction step
    #[error("Arithmetic failure in {operation}: {reason}")]
    ArithmeticFailure { operation: String, reason: String },

    /// Settings file could not be read or parsed
    #[error("Config error: '{path}' - {reason}")]
    ConfigError { path: String, reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateEquation error
    pub fn degenerate_equation(a: impl Into<String>) -> Self {
        CalcError::DegenerateEquation { a: a.into() }
    }

    /// Create an ArithmeticFailure error
    pub fn arithmetic_failure(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ArithmeticFailure {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DegenerateEquation { .. } => "DEGENERATE_EQUATION",
            CalcError::ArithmeticFailure { .. } => "ARITHMETIC_FAILURE",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }

    /// Message suitable for showing next to the input that caused the error.
    ///
    /// Coefficient problems use the quadratic form's wording; expression
    /// problems use the keypad's short error indicator text.
    pub fn user_message(&self) -> String {
        match self {
            CalcError::InvalidInput { field, .. } if field == "expression" => {
                "Error: incomplete expression".to_string()
            }
            CalcError::InvalidInput { .. } => {
                "Please enter valid numbers for all coefficients".to_string()
            }
            CalcError::DegenerateEquation { .. } => {
                "Coefficient \"a\" cannot be zero as this would not be a quadratic equation"
                    .to_string()
            }
            CalcError::ArithmeticFailure { reason, .. } => format!("Error: {}", reason.to_lowercase()),
            CalcError::ConfigError { path, reason } => format!("Could not load settings from {}: {}", path, reason),
        }
    }
}
