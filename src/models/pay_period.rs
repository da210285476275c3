//! Pay period and statutory holiday models.
//!
//! This module contains the [`PayPeriod`] and [`StatutoryHoliday`] types that
//! define the calculation context for a finishing run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A statutory holiday with its entitlement lookback window.
///
/// Each holiday carries its own independent window; windows may overlap and
/// usually reach back several pay periods before the holiday itself.
///
/// # Example
///
/// ```
/// use payroll_finisher::models::StatutoryHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = StatutoryHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     name: "Canada Day".to_string(),
///     lookback_start: NaiveDate::from_ymd_opt(2025, 5, 4).unwrap(),
///     lookback_end: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// };
/// assert!(holiday.lookback_contains(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g. "Canada Day").
    pub name: String,
    /// First day of the entitlement lookback window (inclusive).
    pub lookback_start: NaiveDate,
    /// Last day of the entitlement lookback window (inclusive).
    pub lookback_end: NaiveDate,
}

impl StatutoryHoliday {
    /// Checks whether a worked date falls inside this holiday's lookback
    /// window, inclusive of both ends.
    pub fn lookback_contains(&self, date: NaiveDate) -> bool {
        date >= self.lookback_start && date <= self.lookback_end
    }
}

/// A biweekly pay period.
///
/// The period decides which shift records join the overtime and statutory
/// classification run. Entitlement lookback windows are configured per
/// holiday and are deliberately not bound by the period.
///
/// # Example
///
/// ```
/// use payroll_finisher::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 22).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 7, 6).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
