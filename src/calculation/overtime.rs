//! Biweekly overtime allocation.
//!
//! This module classifies an employee's segmented hours against the 88-hour
//! biweekly threshold. Hours under the threshold stay regular under their
//! original rate code; hours over it flip to the code's overtime variant.
//! Statutory-holiday hours go straight to their own bucket and never consume
//! regular capacity.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::rate_code::{overtime_variant, Classification};

/// The biweekly hour threshold above which hours flip to overtime.
pub const BIWEEKLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(88, 0, 0, false, 0);

/// A dated, rate-coded parcel of hours entering the allocator.
///
/// Produced by segmentation for fresh rows; finished rows bypass the
/// allocator entirely and book through [`HourBuckets::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedSegment {
    /// The calendar day the hours fall on.
    pub date: NaiveDate,
    /// Worked hours in this parcel.
    pub hours: Decimal,
    /// The original rate-code label of the source record.
    pub rate_code: String,
    /// Whether the day is a configured statutory holiday.
    pub statutory: bool,
}

/// Per-employee hour totals, keyed by final rate-code label.
///
/// Four parallel buckets: regular, overtime, statutory-premium, and
/// entitlement passthrough. Ordered maps keep downstream consolidation
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourBuckets {
    /// Hours under the threshold, keyed by original rate code.
    pub regular: BTreeMap<String, Decimal>,
    /// Hours over the threshold, keyed by overtime-variant code.
    pub overtime: BTreeMap<String, Decimal>,
    /// Statutory-holiday hours, keyed by overtime-variant code.
    pub statutory: BTreeMap<String, Decimal>,
    /// Passed-through entitlement hours, keyed by their existing code.
    pub entitlement: BTreeMap<String, Decimal>,
}

impl HourBuckets {
    /// Books hours into the bucket matching the classification, under the
    /// given final label.
    ///
    /// Unclassified hours book as regular under their original label; the
    /// allocator assigns a definite class before booking, so that arm only
    /// serves direct callers.
    pub fn add(&mut self, classification: Classification, code: &str, hours: Decimal) {
        let bucket = match classification {
            Classification::Overtime => &mut self.overtime,
            Classification::Statutory => &mut self.statutory,
            Classification::Entitlement => &mut self.entitlement,
            Classification::Regular | Classification::Unclassified => &mut self.regular,
        };
        *bucket.entry(code.to_string()).or_insert(Decimal::ZERO) += hours;
    }

    /// Total regular hours across all rate codes.
    pub fn regular_total(&self) -> Decimal {
        self.regular.values().copied().sum()
    }

    /// Total overtime hours across all rate codes.
    pub fn overtime_total(&self) -> Decimal {
        self.overtime.values().copied().sum()
    }

    /// Total statutory-holiday hours across all rate codes.
    pub fn statutory_total(&self) -> Decimal {
        self.statutory.values().copied().sum()
    }

    /// Total passed-through entitlement hours.
    pub fn entitlement_total(&self) -> Decimal {
        self.entitlement.values().copied().sum()
    }

    /// True when nothing has been booked.
    pub fn is_empty(&self) -> bool {
        self.regular.is_empty()
            && self.overtime.is_empty()
            && self.statutory.is_empty()
            && self.entitlement.is_empty()
    }
}

/// Allocates one employee's segmented hours against the biweekly threshold.
///
/// Segments are processed in date order (ties keep their input order) with
/// an explicit running total of non-statutory hours. A segment straddling
/// the threshold splits: the hours up to 88 stay regular, the remainder
/// books as overtime under the code's overtime variant. Statutory segments
/// book whole under the variant label and never advance the running total.
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::{allocate_employee_hours, RatedSegment};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let segments = vec![
///     RatedSegment {
///         date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///         hours: Decimal::from_str("85").unwrap(),
///         rate_code: "Regular".to_string(),
///         statutory: false,
///     },
///     RatedSegment {
///         date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
///         hours: Decimal::from_str("10").unwrap(),
///         rate_code: "Regular".to_string(),
///         statutory: false,
///     },
/// ];
///
/// let buckets = allocate_employee_hours(segments);
/// assert_eq!(buckets.regular["Regular"], Decimal::from_str("88").unwrap());
/// assert_eq!(
///     buckets.overtime["Hourly Overtime /STAT"],
///     Decimal::from_str("7").unwrap()
/// );
/// ```
pub fn allocate_employee_hours(mut segments: Vec<RatedSegment>) -> HourBuckets {
    // Stable sort: same-date segments keep their input order
    segments.sort_by_key(|s| s.date);

    let mut buckets = HourBuckets::default();
    let mut cumulative = Decimal::ZERO;

    for segment in segments {
        if segment.statutory {
            // Statutory hours never consume regular capacity
            buckets.add(
                Classification::Statutory,
                &overtime_variant(&segment.rate_code),
                segment.hours,
            );
            continue;
        }

        let after = cumulative + segment.hours;
        if after <= BIWEEKLY_OVERTIME_THRESHOLD {
            buckets.add(Classification::Regular, &segment.rate_code, segment.hours);
        } else if cumulative >= BIWEEKLY_OVERTIME_THRESHOLD {
            buckets.add(
                Classification::Overtime,
                &overtime_variant(&segment.rate_code),
                segment.hours,
            );
        } else {
            let regular_hours = BIWEEKLY_OVERTIME_THRESHOLD - cumulative;
            let overtime_hours = after - BIWEEKLY_OVERTIME_THRESHOLD;
            buckets.add(Classification::Regular, &segment.rate_code, regular_hours);
            buckets.add(
                Classification::Overtime,
                &overtime_variant(&segment.rate_code),
                overtime_hours,
            );
        }
        cumulative = after;
    }

    buckets
}
