//! # Measurement Periods — Year-Month Calendar Positions
//!
//! A [`Period`] is the calendar position a measurement reports against:
//! a year and a month, rendered as `YYYY-MM`. Periods order
//! chronologically, step forward and backward across year boundaries, and
//! iterate over inclusive ranges.
//!
//! ## Parsing
//!
//! [`Period::parse`] is strict: exactly `YYYY-MM`, zero-padded, month
//! `01` to `12`. [`Period::parse_lenient`] additionally accepts a full
//! date (`YYYY-MM-DD`), truncating to the month. Ingest paths that read
//! hand-entered exports use the lenient form; everything else parses
//! strictly so malformed input fails loudly at the boundary.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ─── Serde ───────────────────────────────────────────────────────────

impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ─── Period ──────────────────────────────────────────────────────────

/// A calendar year-month, the granularity at which measurements are
/// recorded.
///
/// Ordering is chronological: `2024-12 < 2025-01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period from numeric components.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPeriod`] when the year is outside
    /// `1..=9999` or the month is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        let invalid = |reason| ValidationError::InvalidPeriod {
            value: format!("{year:04}-{month:02}"),
            reason,
        };
        if !(1..=9999).contains(&year) {
            return Err(invalid("year must be between 1 and 9999"));
        }
        if !(1..=12).contains(&month) {
            return Err(invalid("month must be between 01 and 12"));
        }
        Ok(Self { year, month })
    }

    /// Strictly parse a `YYYY-MM` string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPeriod`] unless the input is
    /// exactly a four-digit year, a hyphen, and a two-digit month in
    /// `01..=12`.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = |reason| ValidationError::InvalidPeriod {
            value: s.to_string(),
            reason,
        };
        let Some((y, m)) = s.split_once('-') else {
            return Err(invalid("expected YYYY-MM"));
        };
        if y.len() != 4 || !y.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("year must be four digits"));
        }
        if m.len() != 2 || !m.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("month must be two digits"));
        }
        let year: i32 = y.parse().map_err(|_| invalid("year must be four digits"))?;
        let month: u32 = m.parse().map_err(|_| invalid("month must be two digits"))?;
        Self::new(year, month)
    }

    /// Parse a `YYYY-MM` string, also accepting a full `YYYY-MM-DD` date
    /// by truncating to the month.
    pub fn parse_lenient(s: &str) -> Result<Self, ValidationError> {
        match s.get(..7) {
            Some(head) if s.len() > 7 && s[7..].starts_with('-') => Self::parse(head),
            _ => Self::parse(s),
        }
    }

    /// The period containing a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPeriod`] for dates whose year
    /// falls outside `1..=9999`.
    pub fn from_date(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new(date.year(), date.month())
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The next month, rolling over the year boundary.
    pub fn succ(&self) -> Period {
        if self.month == 12 {
            Period {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Period {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The previous month, rolling over the year boundary.
    pub fn pred(&self) -> Period {
        if self.month == 1 {
            Period {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Period {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Iterate every month from `start` through `end`, inclusive.
    ///
    /// Yields nothing when `start > end`.
    pub fn range(start: Period, end: Period) -> PeriodRange {
        PeriodRange {
            next: if start <= end { Some(start) } else { None },
            end,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─── Period Range ────────────────────────────────────────────────────

/// Inclusive iterator over consecutive months. Built by [`Period::range`].
#[derive(Debug, Clone)]
pub struct PeriodRange {
    next: Option<Period>,
    end: Period,
}

impl Iterator for PeriodRange {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        let current = self.next?;
        self.next = if current < self.end {
            Some(current.succ())
        } else {
            None
        };
        Some(current)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn p(year: i32, month: u32) -> Period {
        Period::new(year, month).unwrap()
    }

    #[test]
    fn test_parse_strict_valid() {
        assert_eq!(Period::parse("2025-01").unwrap(), p(2025, 1));
        assert_eq!(Period::parse("1999-12").unwrap(), p(1999, 12));
        assert_eq!(Period::parse("0001-01").unwrap(), p(1, 1));
    }

    #[test]
    fn test_parse_strict_rejects_malformed() {
        for bad in [
            "", "2025", "2025-", "2025-1", "2025-001", "25-01", "2025/01",
            "2025-13", "2025-00", "2025-01-15", " 2025-01", "2025-01 ",
            "20a5-01", "2025-0x",
        ] {
            assert!(
                Period::parse(bad).is_err(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_lenient_truncates_full_dates() {
        assert_eq!(Period::parse_lenient("2025-03-17").unwrap(), p(2025, 3));
        assert_eq!(Period::parse_lenient("2025-03").unwrap(), p(2025, 3));
    }

    #[test]
    fn test_parse_lenient_still_rejects_garbage() {
        assert!(Period::parse_lenient("2025-03x17").is_err());
        assert!(Period::parse_lenient("2025-13-01").is_err());
        assert!(Period::parse_lenient("not-a-period").is_err());
        // multibyte input must not panic the truncation
        assert!(Period::parse_lenient("２０２５-０３").is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Period::new(2025, 0).is_err());
        assert!(Period::new(2025, 13).is_err());
        assert!(Period::new(0, 6).is_err());
        assert!(Period::new(10_000, 6).is_err());
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(p(2025, 3).to_string(), "2025-03");
        assert_eq!(p(842, 11).to_string(), "0842-11");
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(p(2024, 12) < p(2025, 1));
        assert!(p(2025, 1) < p(2025, 2));
        assert_eq!(p(2025, 6), p(2025, 6));
    }

    #[test]
    fn test_succ_and_pred_roll_over_years() {
        assert_eq!(p(2024, 12).succ(), p(2025, 1));
        assert_eq!(p(2025, 1).pred(), p(2024, 12));
        assert_eq!(p(2025, 6).succ(), p(2025, 7));
        assert_eq!(p(2025, 6).pred(), p(2025, 5));
    }

    #[test]
    fn test_range_is_inclusive() {
        let months: Vec<Period> = Period::range(p(2024, 11), p(2025, 2)).collect();
        assert_eq!(months, vec![p(2024, 11), p(2024, 12), p(2025, 1), p(2025, 2)]);
    }

    #[test]
    fn test_range_single_month() {
        let months: Vec<Period> = Period::range(p(2025, 4), p(2025, 4)).collect();
        assert_eq!(months, vec![p(2025, 4)]);
    }

    #[test]
    fn test_range_empty_when_reversed() {
        assert_eq!(Period::range(p(2025, 2), p(2025, 1)).count(), 0);
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 23).unwrap();
        assert_eq!(Period::from_date(date).unwrap(), p(2025, 8));
    }

    #[test]
    fn test_serde_uses_string_form() {
        let json = serde_json::to_string(&p(2025, 3)).unwrap();
        assert_eq!(json, "\"2025-03\"");
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p(2025, 3));
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<Period>("\"2025-1\"").is_err());
        assert!(serde_json::from_str::<Period>("\"2025-01-15\"").is_err());
        assert!(serde_json::from_str::<Period>("42").is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let yaml = serde_yaml::to_string(&p(2024, 10)).unwrap();
        let back: Period = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, p(2024, 10));
    }
}
