//! # Quadratic Solver
//!
//! Solves `ax² + bx + c = 0` for real roots.
//!
//! ## Method
//!
//! ```text
//! D = b² − 4ac
//! D > 0   x₁ = (−b + √D) / 2a,  x₂ = (−b − √D) / 2a
//! D = 0   x  = −b / 2a
//! D < 0   no real roots
//! ```
//!
//! `D = 0` is an exact floating point comparison; a discriminant that should
//! be zero but carries rounding noise is reported as two close roots or as no
//! real roots.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::solver::{QuadraticSolver, Roots};
//!
//! let mut solver = QuadraticSolver::new();
//! let solution = solver.solve("1", "-3", "2").unwrap();
//!
//! assert_eq!(solution.discriminant, 1.0);
//! assert_eq!(solution.roots, Roots::TwoRoots { x1: 2.0, x2: 1.0 });
//! assert_eq!(
//!     solver.history().latest().unwrap().text(),
//!     "1x² + -3x + 2 = 0 → x₁ = 2.0000, x₂ = 1.0000 (D=1)"
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::{format_fixed, format_number};
use crate::history::History;
use crate::settings::CalculatorSettings;

/// One of the three coefficient fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoefficientField {
    A,
    B,
    C,
}

impl CoefficientField {
    pub const ALL: [CoefficientField; 3] = [CoefficientField::A, CoefficientField::B, CoefficientField::C];

    pub fn name(self) -> &'static str {
        match self {
            CoefficientField::A => "a",
            CoefficientField::B => "b",
            CoefficientField::C => "c",
        }
    }
}

impl fmt::Display for CoefficientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed coefficients of `ax² + bx + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    /// Parse the three text fields.
    pub fn parse(a: &str, b: &str, c: &str) -> CalcResult<Self> {
        Ok(Coefficients {
            a: parse_coefficient(CoefficientField::A, a)?,
            b: parse_coefficient(CoefficientField::B, b)?,
            c: parse_coefficient(CoefficientField::C, c)?,
        })
    }

    /// `b² − 4ac`
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// `"{a}x² + {b}x + {c} = 0"`
    pub fn equation_text(&self) -> String {
        format!(
            "{}x² + {}x + {} = 0",
            format_number(self.a),
            format_number(self.b),
            format_number(self.c)
        )
    }
}

/// Real roots of a quadratic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Roots {
    TwoRoots { x1: f64, x2: f64 },
    OneRoot { x: f64 },
    NoRealRoots,
}

impl Roots {
    /// Number of distinct real roots
    pub fn count(&self) -> usize {
        match self {
            Roots::TwoRoots { .. } => 2,
            Roots::OneRoot { .. } => 1,
            Roots::NoRealRoots => 0,
        }
    }

    /// Short form used in history records: `"x₁ = 2.0000, x₂ = 1.0000"`.
    pub fn summary(&self, decimals: usize) -> String {
        match self {
            Roots::TwoRoots { x1, x2 } => format!(
                "x₁ = {}, x₂ = {}",
                format_fixed(*x1, decimals),
                format_fixed(*x2, decimals)
            ),
            Roots::OneRoot { x } => format!("x = {}", format_fixed(*x, decimals)),
            Roots::NoRealRoots => "No real solutions".to_string(),
        }
    }

    /// Sentence shown in the result card.
    pub fn description(&self, decimals: usize) -> String {
        match self {
            Roots::TwoRoots { x1, x2 } => format!(
                "Solutions: x₁ = {}, x₂ = {}",
                format_fixed(*x1, decimals),
                format_fixed(*x2, decimals)
            ),
            Roots::OneRoot { x } => format!(
                "This equation has one repeated solution: x = {}",
                format_fixed(*x, decimals)
            ),
            Roots::NoRealRoots => "This equation has no real solutions (complex roots)".to_string(),
        }
    }
}

/// Outcome of a successful solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticSolution {
    pub coefficients: Coefficients,
    pub discriminant: f64,
    pub roots: Roots,
}

impl QuadraticSolution {
    /// `"{a}x² + {b}x + {c} = 0 → {roots} (D={discriminant})"`
    pub fn history_text(&self, decimals: usize) -> String {
        format!(
            "{} → {} (D={})",
            self.coefficients.equation_text(),
            self.roots.summary(decimals),
            format_number(self.discriminant)
        )
    }
}

/// Parse one coefficient field.
///
/// Surrounding whitespace is ignored. Empty text, non-numeric text and
/// non-finite values (`inf`, `NaN`) are `InvalidInput`.
pub fn parse_coefficient(field: CoefficientField, text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_input(field.name(), text, "Coefficient is empty"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input(field.name(), text, "Not a number"))?;
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field.name(), text, "Not a finite number"));
    }
    Ok(value)
}

/// Solve for the real roots of parsed coefficients.
///
/// Fails with `DegenerateEquation` when `a == 0`, and with `ArithmeticFailure`
/// when the discriminant or a root overflows `f64`.
pub fn solve_quadratic(coefficients: Coefficients) -> CalcResult<QuadraticSolution> {
    let Coefficients { a, b, .. } = coefficients;
    if a == 0.0 {
        return Err(CalcError::degenerate_equation(format_number(a)));
    }

    let discriminant = coefficients.discriminant();
    if !discriminant.is_finite() {
        return Err(CalcError::arithmetic_failure(
            "quadratic",
            "Discriminant is not a finite number",
        ));
    }

    let roots = if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        Roots::TwoRoots {
            x1: (-b + sqrt_d) / (2.0 * a),
            x2: (-b - sqrt_d) / (2.0 * a),
        }
    } else if discriminant == 0.0 {
        Roots::OneRoot { x: -b / (2.0 * a) }
    } else {
        Roots::NoRealRoots
    };

    let finite = match roots {
        Roots::TwoRoots { x1, x2 } => x1.is_finite() && x2.is_finite(),
        Roots::OneRoot { x } => x.is_finite(),
        Roots::NoRealRoots => true,
    };
    if !finite {
        return Err(CalcError::arithmetic_failure("quadratic", "Root is not a finite number"));
    }

    Ok(QuadraticSolution {
        coefficients,
        discriminant,
        roots,
    })
}

/// Text contents of the three coefficient inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoefficientInputs {
    pub a: String,
    pub b: String,
    pub c: String,
}

impl CoefficientInputs {
    pub fn get(&self, field: CoefficientField) -> &str {
        match field {
            CoefficientField::A => &self.a,
            CoefficientField::B => &self.b,
            CoefficientField::C => &self.c,
        }
    }

    pub fn set(&mut self, field: CoefficientField, text: impl Into<String>) {
        let slot = match field {
            CoefficientField::A => &mut self.a,
            CoefficientField::B => &mut self.b,
            CoefficientField::C => &mut self.c,
        };
        *slot = text.into();
    }
}

/// Session state of the quadratic form.
///
/// Coefficient texts persist across solves until the user edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticSolver {
    inputs: CoefficientInputs,
    root_decimals: usize,
    last_solution: Option<QuadraticSolution>,
    last_error: Option<CalcError>,
    history: History,
}

impl Default for QuadraticSolver {
    fn default() -> Self {
        QuadraticSolver::new()
    }
}

impl QuadraticSolver {
    pub fn new() -> Self {
        QuadraticSolver::with_settings(&CalculatorSettings::default())
    }

    pub fn with_settings(settings: &CalculatorSettings) -> Self {
        QuadraticSolver {
            inputs: CoefficientInputs::default(),
            root_decimals: settings.root_decimals,
            last_solution: None,
            last_error: None,
            history: History::with_capacity(settings.history_capacity),
        }
    }

    /// Replace the text of one coefficient field.
    pub fn set_coefficient(&mut self, field: CoefficientField, text: impl Into<String>) {
        self.inputs.set(field, text);
    }

    pub fn coefficient(&self, field: CoefficientField) -> &str {
        self.inputs.get(field)
    }

    /// Store the three texts in the form and solve.
    pub fn solve(&mut self, a: &str, b: &str, c: &str) -> CalcResult<QuadraticSolution> {
        self.inputs = CoefficientInputs {
            a: a.to_string(),
            b: b.to_string(),
            c: c.to_string(),
        };
        self.solve_current()
    }

    /// Solve using the texts currently in the form.
    ///
    /// Success, including the no-real-roots case, records a history entry.
    /// Failure records the error for display and leaves history untouched.
    pub fn solve_current(&mut self) -> CalcResult<QuadraticSolution> {
        let outcome = Coefficients::parse(&self.inputs.a, &self.inputs.b, &self.inputs.c)
            .and_then(solve_quadratic);

        match outcome {
            Ok(solution) => {
                let record = solution.history_text(self.root_decimals);
                tracing::debug!(%record, roots = solution.roots.count(), "quadratic solved");
                self.history.push(record);
                self.last_solution = Some(solution);
                self.last_error = None;
                Ok(solution)
            }
            Err(err) => {
                tracing::warn!(error = %err, "quadratic solve rejected");
                self.last_solution = None;
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn last_solution(&self) -> Option<&QuadraticSolution> {
        self.last_solution.as_ref()
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Long-form text of the last solution, e.g. `"Solutions: x₁ = 2.0000, x₂ = 1.0000"`
    pub fn result_description(&self) -> Option<String> {
        self.last_solution
            .as_ref()
            .map(|s| s.roots.description(self.root_decimals))
    }

    pub fn root_decimals(&self) -> usize {
        self.root_decimals
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
