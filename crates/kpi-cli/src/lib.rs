//! # kpi-cli — CLI Tool for the KPI Stack
//!
//! Provides the `kpi` command-line interface over the catalog, records,
//! and reporting crates.
//!
//! ## Subcommands
//!
//! - `kpi evaluate` — Evaluate one result against a threshold band.
//! - `kpi validate` — Check a catalog file for consistency violations.
//! - `kpi submit` — Enter a measurement against a catalog.
//! - `kpi report` — Aggregate a record store into scorecards and trends.
//!
//! ## Exit codes
//!
//! `0` on success, `1` on operational errors (unreadable files, unknown
//! codes, rejected submissions), `2` when `kpi validate` finds catalog
//! violations.
//!
//! ```bash
//! kpi validate catalog.yaml
//! kpi submit --catalog catalog.yaml --indicator GF-01 --result 95
//! kpi report --catalog catalog.yaml --records records.json
//! ```

pub mod evaluate;
pub mod report;
pub mod submit;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use kpi_records::MeasurementRecord;

/// Load a record store from a JSON or YAML file.
///
/// The store is a flat array of measurement records. The format is picked
/// by file extension, defaulting to JSON.
pub fn load_records(path: &Path) -> Result<Vec<MeasurementRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read record store: {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let records = match extension.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse record store: {}", path.display()))?,
        _ => serde_json::from_str(&text)
            .with_context(|| format!("failed to parse record store: {}", path.display()))?,
    };
    Ok(records)
}

/// Write a record store to a file as pretty-printed JSON.
pub fn write_records(path: &Path, records: &[MeasurementRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("failed to serialize record store")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write record store: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kpi_core::{IndicatorId, Period, ProcessId, RecordId, UserId};
    use kpi_engine::Semaphore;
    use kpi_records::RecordState;

    fn make_record(period: &str) -> MeasurementRecord {
        MeasurementRecord {
            id: RecordId::new(),
            indicator_id: IndicatorId::new(),
            process_id: ProcessId::new(),
            period: Period::parse(period).unwrap(),
            result: 95.0,
            target: 100.0,
            unit: "%".to_string(),
            percentage: 95.0,
            semaphore: Semaphore::Green,
            meets_target: false,
            state: RecordState::Submitted,
            notes: None,
            improvement_action: None,
            submitted_by: UserId::new(),
            submitted_by_name: "Leader".to_string(),
            recorded_at: Utc::now(),
            transitions: Vec::new(),
        }
    }

    #[test]
    fn test_records_roundtrip_through_json_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        let records = vec![make_record("2025-03"), make_record("2025-04")];

        write_records(&path, &records).unwrap();
        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].period, records[0].period);
        assert_eq!(loaded[1].percentage, 95.0);
    }

    #[test]
    fn test_load_records_reads_yaml_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.yaml");
        let records = vec![make_record("2025-03")];
        let yaml = serde_yaml::to_string(&records).unwrap();
        std::fs::write(&path, yaml).unwrap();

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].semaphore, Semaphore::Green);
    }

    #[test]
    fn test_load_records_missing_file_fails_with_path() {
        let err = load_records(Path::new("/nonexistent/records.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/records.json"));
    }

    #[test]
    fn test_load_records_rejects_malformed_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, "{ not an array").unwrap();
        assert!(load_records(&path).is_err());
    }
}
