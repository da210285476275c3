//! Shift record model and related types.
//!
//! This module defines the ShiftRecord and TimeDetail structs representing
//! normalized attendance rows entering the payroll finishing engine.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized attendance row for one employee on one date.
///
/// Records arrive pre-normalized from the upstream export: column parsing and
/// header cleanup already happened. Start and end times are frequently absent
/// (the export only carries them for punched shifts), in which case the
/// `hours` field is the only duration source and segmentation degrades to a
/// single same-day segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The employee's display name, also the grouping key.
    pub employee: String,
    /// The nominal transaction date of the shift.
    pub date: NaiveDate,
    /// Clock-in time, when the export carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    /// Clock-out time, when the export carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    /// Reported duration in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    /// The payroll rate-code label (e.g. "Regular", "21.75 Rate").
    pub rate_code: String,
    /// Free-text note, scanned for vacation percentages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ShiftRecord {
    /// Returns the payable duration of this record, if it has one.
    ///
    /// Rows with a missing or non-positive duration are excluded from every
    /// bucket and every statistic, so callers filter on this.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_finisher::models::ShiftRecord;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = ShiftRecord {
    ///     employee: "Dana Cole".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    ///     start_time: None,
    ///     end_time: None,
    ///     hours: Some(Decimal::new(80, 1)),
    ///     rate_code: "Regular".to_string(),
    ///     note: None,
    /// };
    /// assert_eq!(record.payable_hours(), Some(Decimal::new(80, 1))); // 8.0
    ///
    /// let empty = ShiftRecord { hours: Some(Decimal::ZERO), ..record };
    /// assert_eq!(empty.payable_hours(), None);
    /// ```
    pub fn payable_hours(&self) -> Option<Decimal> {
        match self.hours {
            Some(h) if h > Decimal::ZERO => Some(h),
            _ => None,
        }
    }

    /// Returns true when both clock times are present.
    pub fn has_times(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }
}

/// A punched time pair from the optional time-detail feed.
///
/// Keyed by (employee, date); used only to fill in missing clock times on
/// shift records before segmentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDetail {
    /// The employee's display name, matching `ShiftRecord::employee`.
    pub employee: String,
    /// The date the punch pair belongs to.
    pub date: NaiveDate,
    /// Clock-in time.
    pub start_time: NaiveTime,
    /// Clock-out time.
    pub end_time: NaiveTime,
}
