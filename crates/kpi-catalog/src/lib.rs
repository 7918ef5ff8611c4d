//! # kpi-catalog — Process and Indicator Definitions
//!
//! The catalog is the configuration half of the KPI stack: which
//! institutional processes exist, which indicators each one measures, and
//! the target, unit, cadence, and threshold band of every indicator.
//! Measurement submission and reporting both read it; neither writes it.
//!
//! ## Loading and Validation
//!
//! Catalogs load from YAML or JSON files. Field-level format rules
//! (identifier syntax, period syntax, enum values) are enforced during
//! deserialization by the core types. Whole-catalog consistency
//! (duplicate codes, dangling process references, incoherent threshold
//! bands) is checked by [`validate::validate_catalog`], which accumulates
//! every violation instead of stopping at the first so an operator can
//! fix a catalog in one pass.

pub mod catalog;
pub mod indicator;
pub mod process;
pub mod validate;

pub use catalog::{Catalog, CatalogError};
pub use indicator::Indicator;
pub use process::Process;
pub use validate::{validate_catalog, CatalogViolations, Violation};
