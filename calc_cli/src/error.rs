//! Error types for the CLI

use calc_core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that end a CLI invocation
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculation or settings error from calc_core
    #[error("{}", .0.user_message())]
    Calc(#[from] CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Stable code for `--json` error output
    pub fn error_code(&self) -> &'static str {
        match self {
            CliError::Calc(e) => e.error_code(),
            CliError::Io(_) => "IO_ERROR",
            CliError::Json(_) => "JSON_ERROR",
        }
    }
}
