//! # Report CLI — Scorecards and Trends
//!
//! Provides the `kpi report` subcommand. By default prints the
//! organization-wide summary for the latest recorded period; `--process`
//! narrows to one process's scorecard and `--indicator` charts one
//! indicator's history instead.
//!
//! ## Usage
//!
//! ```bash
//! # Organization summary for the latest period:
//! kpi report --catalog catalog.yaml --records records.json
//!
//! # One process, one period, as JSON:
//! kpi report --catalog catalog.yaml --records records.json \
//!     --process GF --period 2025-03 --json
//!
//! # One indicator's history:
//! kpi report --catalog catalog.yaml --records records.json --indicator GF-01
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;

use kpi_catalog::Indicator;
use kpi_core::{IndicatorCode, Period, ProcessCode};
use kpi_engine::format_percent;
use kpi_report::{OrgSummary, ProcessScorecard, TrendSeries};

use crate::load_records;

/// Report subcommand arguments.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the catalog file (YAML or JSON).
    #[arg(long)]
    pub catalog: PathBuf,

    /// Path to the record store.
    #[arg(long)]
    pub records: PathBuf,

    /// Period to report, e.g. 2025-03. Defaults to the latest recorded.
    #[arg(long)]
    pub period: Option<Period>,

    /// Limit the report to one process, by code.
    #[arg(long)]
    pub process: Option<ProcessCode>,

    /// Chart one indicator's history instead, by code.
    #[arg(long, conflicts_with = "process")]
    pub indicator: Option<IndicatorCode>,

    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the report subcommand.
pub fn run_report(args: &ReportArgs) -> Result<u8> {
    let catalog = kpi_catalog::Catalog::from_path(&args.catalog)?;
    let records = load_records(&args.records)?;

    if let Some(code) = &args.indicator {
        let indicator = catalog
            .indicator_by_code(code)
            .ok_or_else(|| anyhow!("unknown indicator code {code}"))?;
        let series = TrendSeries::build(indicator.id, &records);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&series)?);
        } else {
            print_trend(indicator, &series);
        }
        return Ok(0);
    }

    if let Some(code) = &args.process {
        let process = catalog
            .process_by_code(code)
            .ok_or_else(|| anyhow!("unknown process code {code}"))?;
        let period = args
            .period
            .or_else(|| records.iter().map(|r| r.period).max())
            .ok_or_else(|| anyhow!("record store is empty; pass --period to report anyway"))?;
        let card = ProcessScorecard::build(process, &records, period);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&card)?);
        } else {
            print_scorecard(&card, period);
        }
        return Ok(0);
    }

    let summary = OrgSummary::build(&catalog, &records, args.period);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(0)
}

fn print_summary(summary: &OrgSummary) {
    match summary.period {
        Some(period) => println!("Organization summary for {period}"),
        None => println!("Organization summary (no records)"),
    }
    println!();
    for card in &summary.scorecards {
        let status = card.status.map(|s| s.as_str()).unwrap_or("no data");
        println!(
            "  {:<12} {:<8} {:>3} records  mean {:>4}  {}/{} meeting target",
            card.process_code.as_str(),
            status,
            card.record_count,
            format_percent(card.mean_percentage),
            card.meeting_target,
            card.record_count
        );
    }
    println!();
    println!(
        "Processes: {} total, {} reporting, {} compliant, {} at risk",
        summary.process_count,
        summary.processes_with_data,
        summary.compliant_processes,
        summary.at_risk_processes
    );
    println!(
        "Records: {}  Global mean: {}",
        summary.reported_records,
        format_percent(summary.global_mean)
    );
}

fn print_scorecard(card: &ProcessScorecard, period: Period) {
    println!("Scorecard for {} ({}) in {period}", card.process_code, card.process_name);
    println!();
    println!("  records:      {}", card.record_count);
    println!("  mean:         {}", format_percent(card.mean_percentage));
    println!("  meeting:      {} of {}", card.meeting_target, card.record_count);
    println!(
        "  distribution: {} green / {} yellow / {} red",
        card.distribution.green, card.distribution.yellow, card.distribution.red
    );
    let status = card.status.map(|s| s.as_str()).unwrap_or("no data");
    println!("  status:       {status}");
}

fn print_trend(indicator: &Indicator, series: &TrendSeries) {
    println!("Trend for {} ({})", indicator.code, indicator.name);
    println!();
    for point in &series.points {
        println!(
            "  {}  result {:>10}  target {:>10}  {:>4}  {}",
            point.period,
            point.result,
            point.target,
            format_percent(point.percentage),
            point.semaphore
        );
    }
    println!();
    println!("Periods reported: {}", series.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kpi_core::{UserId, UserRole};
    use kpi_records::{submit_measurement, MeasurementRecord, MeasurementSubmission, Submitter};
    use std::path::Path;

    use crate::write_records;

    const CATALOG: &str = r#"
processes:
  - id: "11111111-1111-1111-1111-111111111111"
    code: GF
    name: Financial Management
    kind: support
  - id: "33333333-3333-3333-3333-333333333333"
    code: GC
    name: Quality Management
    kind: strategic
indicators:
  - id: "22222222-2222-2222-2222-222222222222"
    code: GF-01
    name: Budget Execution
    process_id: "11111111-1111-1111-1111-111111111111"
    kind: efficiency
    target: 100.0
    unit: "%"
    frequency: quarterly
    status: active
    polarity: direct
    green_threshold: 90.0
    yellow_threshold: 70.0
  - id: "44444444-4444-4444-4444-444444444444"
    code: GC-01
    name: Client Complaints
    process_id: "33333333-3333-3333-3333-333333333333"
    kind: efficacy
    target: 5.0
    unit: count
    frequency: monthly
    status: active
    polarity: inverse
    green_threshold: 5.0
    yellow_threshold: 10.0
"#;

    fn write_catalog(dir: &Path) -> PathBuf {
        let path = dir.join("catalog.yaml");
        std::fs::write(&path, CATALOG).unwrap();
        path
    }

    fn write_store(dir: &Path, catalog_path: &Path) -> PathBuf {
        let catalog = kpi_catalog::Catalog::from_path(catalog_path).unwrap();
        let admin = Submitter {
            user_id: UserId::new(),
            name: "Ana".to_string(),
            role: UserRole::Administrator,
            process_id: None,
        };
        let mut records: Vec<MeasurementRecord> = Vec::new();
        for (code, period, result) in [
            ("GF-01", "2025-02", 88.0),
            ("GF-01", "2025-03", 95.0),
            ("GC-01", "2025-03", 8.0),
        ] {
            let record = submit_measurement(
                &catalog,
                &records,
                &admin,
                MeasurementSubmission {
                    indicator: IndicatorCode::new(code).unwrap(),
                    period: Period::parse(period).unwrap(),
                    result,
                    notes: None,
                    improvement_action: None,
                    finalize: true,
                },
                Utc::now(),
            )
            .unwrap();
            records.push(record);
        }
        let path = dir.join("records.json");
        write_records(&path, &records).unwrap();
        path
    }

    fn base_args(catalog: PathBuf, records: PathBuf) -> ReportArgs {
        ReportArgs {
            catalog,
            records,
            period: None,
            process: None,
            indicator: None,
            json: false,
        }
    }

    #[test]
    fn test_summary_report_runs() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let records = write_store(dir.path(), &catalog);
        assert_eq!(run_report(&base_args(catalog, records)).unwrap(), 0);
    }

    #[test]
    fn test_summary_report_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let records = write_store(dir.path(), &catalog);
        let mut args = base_args(catalog, records);
        args.json = true;
        assert_eq!(run_report(&args).unwrap(), 0);
    }

    #[test]
    fn test_process_scorecard_report() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let records = write_store(dir.path(), &catalog);
        let mut args = base_args(catalog, records);
        args.process = Some(ProcessCode::new("GF").unwrap());
        args.period = Some(Period::parse("2025-03").unwrap());
        assert_eq!(run_report(&args).unwrap(), 0);
    }

    #[test]
    fn test_trend_report() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let records = write_store(dir.path(), &catalog);
        let mut args = base_args(catalog, records);
        args.indicator = Some(IndicatorCode::new("GF-01").unwrap());
        assert_eq!(run_report(&args).unwrap(), 0);
    }

    #[test]
    fn test_unknown_codes_fail() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let records = write_store(dir.path(), &catalog);

        let mut by_process = base_args(catalog.clone(), records.clone());
        by_process.process = Some(ProcessCode::new("ZZ").unwrap());
        assert!(run_report(&by_process).is_err());

        let mut by_indicator = base_args(catalog, records);
        by_indicator.indicator = Some(IndicatorCode::new("ZZ-99").unwrap());
        assert!(run_report(&by_indicator).is_err());
    }

    #[test]
    fn test_empty_store_process_report_needs_period() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let records = dir.path().join("records.json");
        std::fs::write(&records, "[]").unwrap();

        let mut args = base_args(catalog.clone(), records.clone());
        args.process = Some(ProcessCode::new("GF").unwrap());
        assert!(run_report(&args).is_err(), "no period can be resolved");

        let mut with_period = base_args(catalog, records);
        with_period.process = Some(ProcessCode::new("GF").unwrap());
        with_period.period = Some(Period::parse("2025-03").unwrap());
        assert_eq!(run_report(&with_period).unwrap(), 0);
    }

    #[test]
    fn test_empty_store_summary_still_reports() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let records = dir.path().join("records.json");
        std::fs::write(&records, "[]").unwrap();
        assert_eq!(run_report(&base_args(catalog, records)).unwrap(), 0);
    }
}
