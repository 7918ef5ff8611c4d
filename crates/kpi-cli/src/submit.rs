//! # Submit CLI — Measurement Entry
//!
//! Provides the `kpi submit` subcommand: loads a catalog and an optional
//! record store, runs one measurement through authorization and
//! evaluation, prints the resulting record, and optionally writes the
//! updated store back out.
//!
//! ## Usage
//!
//! ```bash
//! # An administrator enters a finalized measurement for March 2025:
//! kpi submit --catalog catalog.yaml --indicator GF-01 --period 2025-03 --result 95
//!
//! # A process leader keeps a draft and persists the store:
//! kpi submit --catalog catalog.yaml --records records.json \
//!     --indicator GC-01 --result 3 --draft \
//!     --user-name Luis --role process_leader --process GC \
//!     --out records.json
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::Args;

use kpi_catalog::Catalog;
use kpi_core::{IndicatorCode, Period, ProcessCode, UserId, UserRole};
use kpi_records::{submit_measurement, MeasurementSubmission, Submitter};

use crate::{load_records, write_records};

/// Submit subcommand arguments.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Path to the catalog file (YAML or JSON).
    #[arg(long)]
    pub catalog: PathBuf,

    /// Path to the existing record store. Omit to start empty.
    #[arg(long)]
    pub records: Option<PathBuf>,

    /// Indicator code, e.g. GF-01.
    #[arg(long)]
    pub indicator: IndicatorCode,

    /// Period measured, e.g. 2025-03. Defaults to the current month.
    #[arg(long)]
    pub period: Option<Period>,

    /// The measured result.
    #[arg(long, allow_negative_numbers = true)]
    pub result: f64,

    /// Free-form observations.
    #[arg(long)]
    pub notes: Option<String>,

    /// Corrective action plan.
    #[arg(long)]
    pub action: Option<String>,

    /// Keep the record as an editable draft instead of submitting it.
    #[arg(long)]
    pub draft: bool,

    /// Submitting user's display name.
    #[arg(long, default_value = "cli")]
    pub user_name: String,

    /// Submitting user's role.
    #[arg(long, default_value = "administrator")]
    pub role: UserRole,

    /// Process code the submitter leads. Required for process leaders.
    #[arg(long)]
    pub process: Option<ProcessCode>,

    /// Write the updated record store to this path as JSON.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Execute the submit subcommand.
pub fn run_submit(args: &SubmitArgs) -> Result<u8> {
    let catalog = Catalog::from_path(&args.catalog)?;
    let existing = match &args.records {
        Some(path) => load_records(path)?,
        None => Vec::new(),
    };

    let period = match args.period {
        Some(p) => p,
        None => Period::from_date(Utc::now().date_naive())?,
    };

    let process_id = match &args.process {
        Some(code) => Some(
            catalog
                .process_by_code(code)
                .ok_or_else(|| anyhow!("unknown process code {code}"))?
                .id,
        ),
        None => None,
    };

    let submitter = Submitter {
        user_id: UserId::new(),
        name: args.user_name.clone(),
        role: args.role,
        process_id,
    };
    let submission = MeasurementSubmission {
        indicator: args.indicator.clone(),
        period,
        result: args.result,
        notes: args.notes.clone(),
        improvement_action: args.action.clone(),
        finalize: !args.draft,
    };

    let record = submit_measurement(&catalog, &existing, &submitter, submission, Utc::now())?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    if let Some(out) = &args.out {
        let mut updated = existing;
        updated.push(record);
        write_records(out, &updated)?;
        tracing::info!(
            path = %out.display(),
            records = updated.len(),
            "record store written"
        );
    }

    Ok(0)
}
