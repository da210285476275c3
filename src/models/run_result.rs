//! Finishing run result models.
//!
//! This module contains the [`FinishingResult`] type and its associated
//! structures capturing all outputs of a finishing run: consolidated output
//! lines and run statistics.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// A single consolidated payroll line.
///
/// One line exists per (employee, rate-code) combination per run. The
/// customer, service item, and billable markers are fixed business literals
/// carried on every line; `hours` is rounded to 2 decimal places when the
/// line is built and never re-rounded afterwards.
///
/// # Example
///
/// ```
/// use payroll_finisher::models::OutputLine;
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
/// use std::str::FromStr;
///
/// let line = OutputLine {
///     employee: "Dana Cole".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     customer: "STAR TOTAL".to_string(),
///     service_item: "Labor".to_string(),
///     rate_code: "Regular".to_string(),
///     hours: Decimal::from_str("80.00").unwrap(),
///     billable: "N".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    /// The employee's display name.
    pub employee: String,
    /// The line's representative date.
    pub date: NaiveDate,
    /// Fixed customer marker.
    pub customer: String,
    /// Fixed service item marker.
    pub service_item: String,
    /// The final payroll rate-code label.
    pub rate_code: String,
    /// Total hours on this line, rounded to 2 decimal places.
    pub hours: Decimal,
    /// Fixed not-billable marker.
    pub billable: String,
}

/// Aggregated statistics for a finishing run.
///
/// Rows with a zero or missing duration are excluded from every counter and
/// every hour total here, matching their exclusion from the buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Distinct employees with at least one payable record.
    pub employees_processed: u32,
    /// Payable input records considered by the run.
    pub input_records: u32,
    /// Consolidated output lines produced.
    pub output_lines: u32,
    /// Total hours classified as regular time.
    pub regular_hours: Decimal,
    /// Total hours classified as overtime.
    pub overtime_hours: Decimal,
    /// Total hours worked on statutory holidays.
    pub statutory_hours: Decimal,
    /// Total computed and passed-through holiday entitlement hours.
    pub entitlement_hours: Decimal,
}

/// The complete result of a finishing run.
///
/// # Example
///
/// ```
/// use payroll_finisher::models::{FinishingResult, PayPeriod, RunStats};
/// use chrono::{Utc, NaiveDate};
/// use uuid::Uuid;
/// use rust_decimal::Decimal;
///
/// let result = FinishingResult {
///     run_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     pay_period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
///     },
///     lines: vec![],
///     stats: RunStats {
///         employees_processed: 0,
///         input_records: 0,
///         output_lines: 0,
///         regular_hours: Decimal::ZERO,
///         overtime_hours: Decimal::ZERO,
///         statutory_hours: Decimal::ZERO,
///         entitlement_hours: Decimal::ZERO,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishingResult {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The pay period the run covered.
    pub pay_period: PayPeriod,
    /// Consolidated output lines, ordered by employee then rate-code.
    pub lines: Vec<OutputLine>,
    /// Headline statistics for the run.
    pub stats: RunStats,
}
