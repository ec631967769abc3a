//! # Keypad Calculator CLI
//!
//! Terminal front end for calc_core.
//!
//! ## Usage
//!
//! ```bash
//! calc_cli                         # interactive keypad
//! calc_cli eval "2+3x4"            # 20 (left to right)
//! calc_cli solve 1 -3 2            # x₁ = 2.0000, x₂ = 1.0000
//! calc_cli --json solve 1 0 1      # machine-readable output
//! calc_cli --config keypad.json settings
//! ```

mod commands;
mod error;
mod repl;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use calc_core::{CalculatorSettings, QuadraticSolution, Session};

use commands::{Cli, Commands, EvalArgs, SolveArgs};
use error::CliResult;

/// JSON output of the eval command
#[derive(Serialize)]
struct EvalReport<'a> {
    keys: &'a str,
    value: Option<f64>,
    display: String,
    formatted_display: String,
    record: Option<String>,
}

/// JSON output of the solve command
#[derive(Serialize)]
struct SolveReport {
    #[serde(flatten)]
    solution: QuadraticSolution,
    description: String,
    record: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if cli.json {
                let body = serde_json::json!({ "code": e.error_code(), "message": e.to_string() });
                eprintln!("{}", body);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let settings = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading settings");
            CalculatorSettings::load(path)?
        }
        None => CalculatorSettings::default(),
    };
    let mut session = Session::new(settings);

    match &cli.command {
        Some(Commands::Eval(args)) => run_eval(&mut session, args, cli.json),
        Some(Commands::Solve(args)) => run_solve(&mut session, args, cli.json),
        Some(Commands::Settings) => {
            println!("{}", session.settings().to_json_pretty()?);
            Ok(())
        }
        Some(Commands::Repl) | None => {
            let stdin = io::stdin();
            repl::run(&mut session, stdin.lock(), io::stdout())?;
            Ok(())
        }
    }
}

fn run_eval(session: &mut Session, args: &EvalArgs, json: bool) -> CliResult<()> {
    let calc = session.evaluator_mut();

    let mut value = calc.press_sequence(&args.keys)?;
    // Implied trailing "="
    if let Some(v) = calc.evaluate()? {
        value = Some(v);
    }

    // Keys typed after the last "=" (e.g. "2+3=c") discard its result
    let (value, record) = if calc.is_just_evaluated() {
        (value, calc.history().latest().map(|e| e.text().to_string()))
    } else {
        (None, None)
    };
    tracing::info!(keys = %args.keys, ?value, "eval finished");
    if json {
        let report = EvalReport {
            keys: &args.keys,
            value,
            display: calc.display().to_string(),
            formatted_display: calc.formatted_display(),
            record,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match record {
            Some(record) => println!("{}", record),
            None => println!("{}", calc.formatted_display()),
        }
    }
    Ok(())
}

fn run_solve(session: &mut Session, args: &SolveArgs, json: bool) -> CliResult<()> {
    let solver = session.solver_mut();
    let solution = solver.solve(&args.a, &args.b, &args.c)?;
    let decimals = solver.root_decimals();
    tracing::info!(roots = solution.roots.count(), "solve finished");

    if json {
        let report = SolveReport {
            solution,
            description: solution.roots.description(decimals),
            record: solution.history_text(decimals),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", solution.coefficients.equation_text());
        println!("{}", solution.roots.description(decimals));
        println!("Discriminant: {}", calc_core::format::format_number(solution.discriminant));
    }
    Ok(())
}
