//! Union benefit report models.
//!
//! The union benefit calculation is independent of the finishing run: it
//! reads the same shift records but produces its own per-employee cost
//! report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-employee union benefit line.
///
/// Actual hours are reported alongside the capped (payable) hours so the
/// effect of the weekly cap stays visible. All figures are rounded to 2
/// decimal places when the line is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionBenefitLine {
    /// The employee's display name.
    pub employee: String,
    /// Hours actually worked in week 1.
    pub week1_hours: Decimal,
    /// Week-1 hours after the weekly cap.
    pub week1_payable: Decimal,
    /// Hours actually worked in week 2.
    pub week2_hours: Decimal,
    /// Week-2 hours after the weekly cap.
    pub week2_payable: Decimal,
    /// Sum of both payable figures.
    pub total_payable: Decimal,
    /// Benefit cost for this employee.
    pub total_cost: Decimal,
}

/// The complete union benefit report for one biweekly batch.
///
/// The week-1 boundary is global: every employee's split uses the earliest
/// transaction date found anywhere in the batch. An empty batch produces an
/// empty report with no dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionBenefitReport {
    /// Earliest transaction date across the batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest_date: Option<NaiveDate>,
    /// Last day counted into week 1 (earliest date plus six days).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week1_end: Option<NaiveDate>,
    /// Per-employee lines, ordered by employee name.
    pub lines: Vec<UnionBenefitLine>,
    /// Sum of all per-employee costs.
    pub total_cost: Decimal,
}
