//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Keypad calculator: left-to-right arithmetic and quadratic equations
#[derive(Parser, Debug)]
#[command(name = "calc_cli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to the interactive keypad)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys on the standard calculator and print the result
    ///
    /// Every character is a key: digits, `.`, `+ - x /`, `%`, `n` (+/-),
    /// `c` (AC) and `=`. A trailing `=` is implied.
    Eval(EvalArgs),

    /// Solve ax² + bx + c = 0
    Solve(SolveArgs),

    /// Interactive keypad session
    Repl,

    /// Print the effective settings as JSON
    Settings,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Keys to press, e.g. "2+3x4"
    #[arg(allow_hyphen_values = true)]
    pub keys: String,
}

/// Arguments for the solve command
#[derive(Parser, Debug)]
pub struct SolveArgs {
    /// Coefficient of x²
    #[arg(allow_negative_numbers = true)]
    pub a: String,

    /// Coefficient of x
    #[arg(allow_negative_numbers = true)]
    pub b: String,

    /// Constant term
    #[arg(allow_negative_numbers = true)]
    pub c: String,
}
