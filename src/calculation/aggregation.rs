//! Output line consolidation.
//!
//! The four hour buckets collapse into billing lines, one per employee and
//! final rate-code label. Overtime and statutory hours that landed under the
//! same transformed label merge into a single line. Numeric rounding to two
//! decimal places happens here, at line construction, and nowhere earlier.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::holiday_entitlement::PHP_RATE_CODE;
use super::overtime::HourBuckets;
use super::rate_code::{classify, Classification};
use crate::models::OutputLine;

/// Fixed customer marker on every output line.
pub const OUTPUT_CUSTOMER: &str = "STAR TOTAL";

/// Fixed service item on every output line.
pub const OUTPUT_SERVICE_ITEM: &str = "Labor";

/// Fixed billable flag on every output line.
pub const OUTPUT_BILLABLE: &str = "N";

/// Builds one employee's output lines from their hour buckets.
///
/// Bucket entries merge by final rate-code label, computed entitlement hours
/// join under the entitlement label, and every line carries the fixed
/// customer, service item, and billable markers. Lines are dated at the
/// employee's earliest in-scope transaction date, except entitlement-coded
/// labels, which use the entitlement date when one exists.
pub fn consolidate_employee(
    employee: &str,
    first_date: NaiveDate,
    buckets: &HourBuckets,
    entitlement_hours: Decimal,
    entitlement_date: Option<NaiveDate>,
) -> Vec<OutputLine> {
    let mut merged: BTreeMap<String, Decimal> = BTreeMap::new();
    for bucket in [
        &buckets.regular,
        &buckets.overtime,
        &buckets.statutory,
        &buckets.entitlement,
    ] {
        for (code, hours) in bucket {
            *merged.entry(code.clone()).or_insert(Decimal::ZERO) += *hours;
        }
    }
    if entitlement_hours > Decimal::ZERO {
        *merged
            .entry(PHP_RATE_CODE.to_string())
            .or_insert(Decimal::ZERO) += entitlement_hours;
    }

    merged
        .into_iter()
        .map(|(rate_code, hours)| {
            let date = if classify(&rate_code) == Classification::Entitlement {
                entitlement_date.unwrap_or(first_date)
            } else {
                first_date
            };
            OutputLine {
                employee: employee.to_string(),
                date,
                customer: OUTPUT_CUSTOMER.to_string(),
                service_item: OUTPUT_SERVICE_ITEM.to_string(),
                rate_code,
                hours: hours.round_dp(2),
                billable: OUTPUT_BILLABLE.to_string(),
            }
        })
        .collect()
}

/// Sorts lines by employee name, then rate code.
pub fn sort_output_lines(lines: &mut [OutputLine]) {
    lines.sort_by(|a, b| {
        a.employee
            .cmp(&b.employee)
            .then_with(|| a.rate_code.cmp(&b.rate_code))
    });
}
