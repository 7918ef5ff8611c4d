//! # Evaluate CLI — One Result Against One Band
//!
//! Provides the `kpi evaluate` subcommand: a direct line to the
//! evaluation engine for spot checks and scripting, no catalog required.
//!
//! ## Usage
//!
//! ```bash
//! # A direct indicator (higher is better):
//! kpi evaluate --result 95 --target 100 --green 90 --yellow 70 --polarity direct
//!
//! # An inverse indicator (lower is better), as JSON:
//! kpi evaluate --result 8 --target 5 --green 5 --yellow 10 --polarity inverse --json
//! ```

use anyhow::Result;
use clap::Args;

use kpi_engine::{format_percent, Polarity, ThresholdBand};

/// Evaluate subcommand arguments.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// The measured result.
    #[arg(long, allow_negative_numbers = true)]
    pub result: f64,

    /// The target the result reports against.
    #[arg(long, allow_negative_numbers = true)]
    pub target: f64,

    /// Green threshold of the band.
    #[arg(long, allow_negative_numbers = true)]
    pub green: f64,

    /// Yellow threshold of the band.
    #[arg(long, allow_negative_numbers = true)]
    pub yellow: f64,

    /// Band direction: `direct` (higher is better) or `inverse` (lower is
    /// better).
    #[arg(long)]
    pub polarity: Option<Polarity>,

    /// Emit the evaluation as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the evaluate subcommand.
pub fn run_evaluate(args: &EvaluateArgs) -> Result<u8> {
    let polarity = resolve_polarity(args)?;
    let band = ThresholdBand::new(args.green, args.yellow, polarity)?;
    let evaluation = band.evaluate(args.result, args.target);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("  result:       {}", args.result);
        println!("  target:       {}", args.target);
        println!("  polarity:     {polarity}");
        println!("  percentage:   {}", format_percent(evaluation.percentage));
        println!(
            "  semaphore:    {} ({}, {})",
            evaluation.semaphore,
            evaluation.semaphore.color_token(),
            evaluation.semaphore.hex_color()
        );
        println!("  meets target: {}", if evaluation.meets_target { "yes" } else { "no" });
    }

    Ok(0)
}

#[cfg(feature = "infer-polarity")]
fn resolve_polarity(args: &EvaluateArgs) -> Result<Polarity> {
    Ok(args
        .polarity
        .unwrap_or_else(|| Polarity::infer(args.green, args.yellow)))
}

#[cfg(not(feature = "infer-polarity"))]
fn resolve_polarity(args: &EvaluateArgs) -> Result<Polarity> {
    args.polarity
        .ok_or_else(|| anyhow::anyhow!("--polarity is required (direct or inverse)"))
}
