//! # Validate CLI — Catalog Consistency Checks
//!
//! Provides the `kpi validate` subcommand. Loads a catalog file and runs
//! every whole-catalog consistency check, printing the accumulated
//! violations.
//!
//! Exits `0` for a clean catalog, `2` when violations are found, and `1`
//! when the file cannot be read or parsed at all.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use kpi_catalog::{validate_catalog, Catalog};

/// Validate subcommand arguments.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the catalog file (YAML or JSON).
    pub catalog: PathBuf,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let catalog = Catalog::from_path(&args.catalog)?;
    let violations = validate_catalog(&catalog);

    if violations.is_empty() {
        println!(
            "OK: {} ({} processes, {} indicators)",
            args.catalog.display(),
            catalog.processes.len(),
            catalog.indicators.len()
        );
        Ok(0)
    } else {
        println!("FAIL: {} ({} violations)", args.catalog.display(), violations.len());
        println!("{violations}");
        Ok(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_catalog(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    const CLEAN_CATALOG: &str = r#"
processes:
  - id: "11111111-1111-1111-1111-111111111111"
    code: GF
    name: Financial Management
    kind: support
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
"#;

    // Same catalog, but the band cannot separate three zones and the
    // indicator points at a process that is not defined.
    const BROKEN_CATALOG: &str = r#"
processes:
  - id: "11111111-1111-1111-1111-111111111111"
    code: GF
    name: Financial Management
    kind: support
indicators:
  - id: "22222222-2222-2222-2222-222222222222"
    code: GF-01
    name: Budget Execution
    process_id: "99999999-9999-9999-9999-999999999999"
    kind: efficiency
    target: 100.0
    unit: "%"
    frequency: quarterly
    status: active
    polarity: direct
    green_threshold: 70.0
    yellow_threshold: 70.0
"#;

    #[test]
    fn test_clean_catalog_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(dir.path(), "catalog.yaml", CLEAN_CATALOG);
        let code = run_validate(&ValidateArgs { catalog: path }).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_violations_exit_two() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(dir.path(), "catalog.yaml", BROKEN_CATALOG);
        let code = run_validate(&ValidateArgs { catalog: path }).unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_missing_file_is_operational_error() {
        let args = ValidateArgs {
            catalog: PathBuf::from("/nonexistent/catalog.yaml"),
        };
        assert!(run_validate(&args).is_err());
    }

    #[test]
    fn test_unparseable_file_is_operational_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(dir.path(), "catalog.yaml", ": not yaml :");
        assert!(run_validate(&ValidateArgs { catalog: path }).is_err());
    }
}
