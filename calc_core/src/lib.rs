//! # calc_core - Keypad Calculator Engine
//!
//! `calc_core` holds all of the calculator's computation and session state.
//! The GUI and CLI crates are thin callers: they translate button presses and
//! form submissions into calls on the types below and render what comes back.
//!
//! ## Design Philosophy
//!
//! - **Owned state**: each calculator unit is a plain struct the caller owns
//! - **Errors are values**: division by zero or bad input never panics
//! - **No precedence**: the keypad reduces strictly left to right
//! - **JSON-friendly**: all state and results implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{EvaluatorState, QuadraticSolver};
//!
//! let mut keypad = EvaluatorState::new();
//! assert_eq!(keypad.press_sequence("2+3x4=").unwrap(), Some(20.0));
//!
//! let mut solver = QuadraticSolver::new();
//! let solution = solver.solve("1", "2", "1").unwrap();
//! assert_eq!(solution.discriminant, 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`evaluator`] - keypad state machine and left-to-right reducer
//! - [`keypad`] - button layout and key dispatch
//! - [`solver`] - quadratic equation solver
//! - [`history`] - bounded most-recent-first history list
//! - [`session`] - both units plus the active mode
//! - [`format`] - number formatting for display and history
//! - [`settings`] - session settings (JSON)
//! - [`errors`] - structured error types

pub mod errors;
pub mod evaluator;
pub mod format;
pub mod history;
pub mod keypad;
pub mod session;
pub mod settings;
pub mod solver;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use evaluator::{EvaluatorState, Operator};
pub use history::{History, HistoryEntry};
pub use keypad::{Key, KeyRole, KEYPAD_LAYOUT};
pub use session::{Mode, Session};
pub use settings::CalculatorSettings;
pub use solver::{CoefficientField, QuadraticSolution, QuadraticSolver, Roots};
