//! Interactive keypad session.
//!
//! In standard mode each line is a run of key presses (`5+3`, `=`, `c`).
//! In quadratic mode each line holds the three coefficients `a b c`.
//! Lines starting with `:` are session commands.

use std::io::{self, BufRead, Write};

use calc_core::format::format_number;
use calc_core::{CoefficientField, History, Mode, Session};

const HELP: &str = "\
Commands:
  :mode      switch between the standard keypad and the quadratic solver
  :history   show the history of the current mode
  :help      show this help
  :quit      leave (Ctrl-D works too)
Standard mode keys: 0-9 . + - x / % n(+/-) c(AC) =
Quadratic mode: enter a b c, e.g. `1 -3 2`";

/// Run the session until `:quit` or end of input.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "Keypad Calculator - type :help for commands")?;
    prompt(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        match line {
            "" => {}
            ":q" | ":quit" | ":exit" => break,
            ":help" => writeln!(out, "{}", HELP)?,
            ":mode" => {
                let mode = session.toggle_mode();
                writeln!(out, "Switched to {} mode", mode_name(mode))?;
            }
            ":history" => {
                let history = match session.mode() {
                    Mode::Standard => session.evaluator().history(),
                    Mode::Quadratic => session.solver().history(),
                };
                print_history(history, &mut out)?;
            }
            _ if line.starts_with(':') => writeln!(out, "Unknown command {} (try :help)", line)?,
            _ => match session.mode() {
                Mode::Standard => standard_line(session, line, &mut out)?,
                Mode::Quadratic => quadratic_line(session, line, &mut out)?,
            },
        }

        prompt(session, &mut out)?;
    }

    writeln!(out)?;
    Ok(())
}

fn standard_line<W: Write>(session: &mut Session, line: &str, out: &mut W) -> io::Result<()> {
    let calc = session.evaluator_mut();
    if let Err(e) = calc.press_sequence(line) {
        tracing::debug!(code = e.error_code(), %line, "key sequence failed");
        writeln!(out, "{}", e.user_message())?;
    }

    let expression = calc.expression_line();
    if !expression.is_empty() {
        writeln!(out, "  {}", expression)?;
    }
    writeln!(out, "  [{}]", calc.formatted_display())
}

fn quadratic_line<W: Write>(session: &mut Session, line: &str, out: &mut W) -> io::Result<()> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [a, b, c] = fields.as_slice() else {
        tracing::debug!(fields = fields.len(), "expected three coefficients");
        return writeln!(out, "Enter three coefficients: a b c");
    };

    let solver = session.solver_mut();
    for (field, text) in CoefficientField::ALL.into_iter().zip([a, b, c]) {
        solver.set_coefficient(field, *text);
    }

    match solver.solve_current() {
        Ok(solution) => {
            writeln!(out, "  {}", solution.coefficients.equation_text())?;
            writeln!(out, "  {}", solution.roots.description(solver.root_decimals()))?;
            writeln!(out, "  Discriminant: {}", format_number(solution.discriminant))
        }
        Err(e) => {
            tracing::debug!(code = e.error_code(), %line, "coefficients rejected");
            writeln!(out, "{}", e.user_message())
        }
    }
}

fn print_history<W: Write>(history: &History, out: &mut W) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "(no history)");
    }
    for (i, entry) in history.iter().enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, entry.text())?;
    }
    Ok(())
}

fn prompt<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let symbol = match session.mode() {
        Mode::Standard => "calc",
        Mode::Quadratic => "ax²+bx+c",
    };
    write!(out, "{}> ", symbol)?;
    out.flush()
}

fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Standard => "standard",
        Mode::Quadratic => "quadratic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::default();
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_standard_keys() {
        let (session, out) = run_script("5+3\n=\n");
        assert!(out.contains("5 + 3 = 8"));
        assert!(out.contains("[8]"));
        assert_eq!(session.evaluator().history().len(), 1);
    }

    #[test]
    fn test_division_by_zero_message() {
        let (_, out) = run_script("6/0=\n");
        assert!(out.contains("Error: division by zero"));
        assert!(out.contains("[Error]"));
    }

    #[test]
    fn test_quadratic_mode() {
        let (session, out) = run_script(":mode\n1 -3 2\n1 0 1\n:history\n");
        assert!(out.contains("Solutions: x₁ = 2.0000, x₂ = 1.0000"));
        assert!(out.contains("This equation has no real solutions (complex roots)"));
        assert!(out.contains("  1. 1x² + 0x + 1 = 0 → No real solutions (D=-4)"));
        assert_eq!(session.mode(), Mode::Quadratic);
        assert_eq!(session.solver().coefficient(CoefficientField::B), "0");
    }

    #[test]
    fn test_quadratic_errors() {
        let (_, out) = run_script(":mode\n0 2 1\nabc 1 1\n1 2\n");
        assert!(out.contains("cannot be zero"));
        assert!(out.contains("Please enter valid numbers for all coefficients"));
        assert!(out.contains("Enter three coefficients: a b c"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run_script(":quit\n1+1=\n");
        assert!(session.evaluator().history().is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let (_, out) = run_script(":frobnicate\n");
        assert!(out.contains("Unknown command :frobnicate"));
    }
}
