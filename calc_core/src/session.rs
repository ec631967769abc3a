//! # Calculator Session
//!
//! Owns both calculator units for the lifetime of a window (or browser tab)
//! and tracks which one is on screen. Switching modes never resets either
//! unit.

use serde::{Deserialize, Serialize};

use crate::evaluator::EvaluatorState;
use crate::settings::CalculatorSettings;
use crate::solver::QuadraticSolver;

/// Which calculator is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Standard,
    Quadratic,
}

impl Mode {
    /// The other mode
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Standard => Mode::Quadratic,
            Mode::Quadratic => Mode::Standard,
        }
    }

    /// Caption of the button that switches *to* this mode
    pub fn switch_label(self) -> &'static str {
        match self {
            Mode::Standard => "Standard Calc",
            Mode::Quadratic => "Quadratic",
        }
    }

    /// Caption of the switch button shown while this mode is active
    pub fn switch_target_label(self) -> &'static str {
        self.toggled().switch_label()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    mode: Mode,
    settings: CalculatorSettings,
    evaluator: EvaluatorState,
    solver: QuadraticSolver,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(CalculatorSettings::default())
    }
}

impl Session {
    pub fn new(settings: CalculatorSettings) -> Self {
        Session {
            mode: Mode::default(),
            evaluator: EvaluatorState::with_settings(&settings),
            solver: QuadraticSolver::with_settings(&settings),
            settings,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "switching calculator mode");
            self.mode = mode;
        }
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    pub fn evaluator(&self) -> &EvaluatorState {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut EvaluatorState {
        &mut self.evaluator
    }

    pub fn solver(&self) -> &QuadraticSolver {
        &self.solver
    }

    pub fn solver_mut(&mut self) -> &mut QuadraticSolver {
        &mut self.solver
    }
}
