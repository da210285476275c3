//! Public-holiday entitlement accrual.
//!
//! For each configured statutory holiday, an employee's base worked hours
//! inside the holiday's lookback window convert into a dollar entitlement
//! (one twentieth of lookback wages plus vacation loading), which is then
//! expressed in payable hours at the fixed entitlement rate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::rate_code::{classify, rate_for, Classification};
use super::vacation::max_vacation_percent;
use crate::models::{ShiftRecord, StatutoryHoliday};

/// Maximum lookback hours credited per holiday.
pub const LOOKBACK_HOURS_CAP: Decimal = Decimal::from_parts(176, 0, 0, false, 0);

/// Rate-code label for emitted entitlement lines.
pub const PHP_RATE_CODE: &str = "PHP (Holiday)";

/// Entitlement dollars are one twentieth of loaded lookback wages.
const ENTITLEMENT_WAGE_DIVISOR: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Dollar value of one entitlement hour.
const PHP_HOURLY_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// One holiday's contribution to an employee's entitlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayContribution {
    /// Name of the statutory holiday.
    pub holiday: String,
    /// The holiday's calendar date.
    pub date: NaiveDate,
    /// Qualifying lookback hours after the cap.
    pub capped_hours: Decimal,
    /// Hourly rate of the most frequent qualifying rate code.
    pub representative_rate: Decimal,
    /// Vacation loading applied to lookback wages.
    pub vacation_percent: Decimal,
    /// Entitlement hours accrued from this holiday.
    pub entitlement_hours: Decimal,
}

/// An employee's total entitlement across all configured holidays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitlementResult {
    /// Sum of entitlement hours over all contributing holidays.
    pub total_hours: Decimal,
    /// Per-holiday breakdown; holidays with no qualifying hours are omitted.
    pub contributions: Vec<HolidayContribution>,
}

/// Calculates one employee's holiday entitlement.
///
/// A row qualifies for a holiday when its date falls inside the holiday's
/// lookback window (inclusive), its rate code is still unclassified, and it
/// carries positive hours. Qualifying hours are capped at 176 per holiday
/// and valued at the most frequent qualifying rate code (ties broken by
/// first occurrence). A holiday with no qualifying rows contributes nothing.
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::calculate_holiday_entitlement;
/// use payroll_finisher::models::{ShiftRecord, StatutoryHoliday};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records = vec![ShiftRecord {
///     employee: "Dana Smith".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
///     start_time: None,
///     end_time: None,
///     hours: Some(Decimal::from_str("200").unwrap()),
///     rate_code: "20.00 Rate".to_string(),
///     note: None,
/// }];
/// let holidays = vec![StatutoryHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     name: "Canada Day".to_string(),
///     lookback_start: NaiveDate::from_ymd_opt(2025, 5, 4).unwrap(),
///     lookback_end: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// }];
///
/// let result = calculate_holiday_entitlement(&records, &holidays);
/// // 176 capped hours at 20.00 with 4% vacation: 3660.80 / 20 / 30
/// assert_eq!(result.total_hours.round_dp(2), Decimal::from_str("6.10").unwrap());
/// ```
pub fn calculate_holiday_entitlement(
    records: &[ShiftRecord],
    holidays: &[StatutoryHoliday],
) -> EntitlementResult {
    let mut total_hours = Decimal::ZERO;
    let mut contributions = Vec::new();

    for holiday in holidays {
        let qualifying: Vec<&ShiftRecord> = records
            .iter()
            .filter(|record| {
                record.payable_hours().is_some()
                    && classify(&record.rate_code) == Classification::Unclassified
                    && holiday.lookback_contains(record.date)
            })
            .collect();

        if qualifying.is_empty() {
            continue;
        }

        let worked: Decimal = qualifying
            .iter()
            .filter_map(|record| record.payable_hours())
            .sum();
        let capped_hours = worked.min(LOOKBACK_HOURS_CAP);

        let representative_rate = representative_rate_code(&qualifying)
            .map(rate_for)
            .unwrap_or(Decimal::ZERO);
        let vacation_percent =
            max_vacation_percent(qualifying.iter().map(|record| record.note.as_deref()));

        let wages = capped_hours * representative_rate;
        let entitlement_dollars =
            wages * (Decimal::ONE + vacation_percent) / ENTITLEMENT_WAGE_DIVISOR;
        let entitlement_hours = entitlement_dollars / PHP_HOURLY_RATE;

        total_hours += entitlement_hours;
        contributions.push(HolidayContribution {
            holiday: holiday.name.clone(),
            date: holiday.date,
            capped_hours,
            representative_rate,
            vacation_percent,
            entitlement_hours,
        });
    }

    EntitlementResult {
        total_hours,
        contributions,
    }
}

/// The most frequent rate code among qualifying rows, ties broken by first
/// occurrence in input order.
fn representative_rate_code<'a>(rows: &[&'a ShiftRecord]) -> Option<&'a str> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, record) in rows.iter().enumerate() {
        counts
            .entry(record.rate_code.as_str())
            .or_insert((0, index))
            .0 += 1;
    }

    counts
        .into_iter()
        .min_by_key(|&(_, (count, first_index))| (std::cmp::Reverse(count), first_index))
        .map(|(code, _)| code)
}
