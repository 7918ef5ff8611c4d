//! # kpi CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kpi_cli::evaluate::{run_evaluate, EvaluateArgs};
use kpi_cli::report::{run_report, ReportArgs};
use kpi_cli::submit::{run_submit, SubmitArgs};
use kpi_cli::validate::{run_validate, ValidateArgs};

/// KPI Stack CLI
///
/// Evaluates measured results against catalog threshold bands, validates
/// catalog files, enters measurements, and aggregates record stores into
/// scorecards and trend series.
#[derive(Parser, Debug)]
#[command(name = "kpi", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one result against a threshold band.
    Evaluate(EvaluateArgs),

    /// Check a catalog file for consistency violations.
    Validate(ValidateArgs),

    /// Enter a measurement against a catalog.
    Submit(SubmitArgs),

    /// Aggregate a record store into scorecards and trends.
    Report(ReportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Evaluate(args) => run_evaluate(&args),
        Commands::Validate(args) => run_validate(&args),
        Commands::Submit(args) => run_submit(&args),
        Commands::Report(args) => run_report(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
