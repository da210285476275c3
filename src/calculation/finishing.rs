//! Biweekly finishing run orchestration.
//!
//! A run validates the batch, fills missing punch times from the optional
//! time-detail feed, then walks each employee in name order: fresh rows are
//! segmented and allocated against the biweekly threshold, already-classified
//! rows pass straight into their buckets, and the holiday entitlement accrues
//! over the full batch. Everything consolidates into sorted output lines with
//! run statistics.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

use super::aggregation::{consolidate_employee, sort_output_lines};
use super::holiday_entitlement::calculate_holiday_entitlement;
use super::overtime::{allocate_employee_hours, RatedSegment};
use super::rate_code::{classify, Classification};
use super::segmentation::segment_record;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    FinishingResult, PayPeriod, RunStats, ShiftRecord, StatutoryHoliday, TimeDetail,
};

/// Runs the finishing pipeline over one biweekly batch.
///
/// Rows dated inside the pay period join the overtime and statutory run;
/// entitlement lookback windows see the whole batch. Data-level issues
/// (zero or missing durations, unparsable rate codes, missing times) degrade
/// per the stage that owns them and never abort the run. Structural issues
/// (an empty employee name, a negative duration, an inverted period or
/// lookback window) fail loudly before any processing. Caller data is never
/// mutated; the run works on its own normalized copy.
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::run_finishing;
/// use payroll_finisher::models::{PayPeriod, ShiftRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records = vec![ShiftRecord {
///     employee: "Dana Cole".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     start_time: None,
///     end_time: None,
///     hours: Some(Decimal::from_str("95").unwrap()),
///     rate_code: "Regular".to_string(),
///     note: None,
/// }];
/// let pay_period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
/// };
///
/// let result = run_finishing(&records, &[], &pay_period, &[]).unwrap();
/// assert_eq!(result.lines.len(), 2);
/// assert_eq!(result.stats.regular_hours, Decimal::from_str("88").unwrap());
/// assert_eq!(result.stats.overtime_hours, Decimal::from_str("7").unwrap());
/// ```
pub fn run_finishing(
    records: &[ShiftRecord],
    time_details: &[TimeDetail],
    pay_period: &PayPeriod,
    holidays: &[StatutoryHoliday],
) -> EngineResult<FinishingResult> {
    validate(records, pay_period, holidays)?;

    let records = merge_time_details(records, time_details);

    let statutory_dates: HashSet<NaiveDate> =
        holidays.iter().map(|holiday| holiday.date).collect();
    let entitlement_date = holidays
        .iter()
        .map(|holiday| holiday.date)
        .filter(|date| pay_period.contains_date(*date))
        .min();

    let mut by_employee: BTreeMap<String, Vec<ShiftRecord>> = BTreeMap::new();
    for record in records {
        by_employee
            .entry(record.employee.clone())
            .or_default()
            .push(record);
    }

    let mut lines = Vec::new();
    let mut employees_processed = 0u32;
    let mut input_records = 0u32;
    let mut regular_hours = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;
    let mut statutory_hours = Decimal::ZERO;
    let mut entitlement_hours = Decimal::ZERO;

    for (employee, employee_records) in &by_employee {
        let payable: Vec<(&ShiftRecord, Decimal)> = employee_records
            .iter()
            .filter_map(|record| record.payable_hours().map(|hours| (record, hours)))
            .collect();
        let Some(first_date) = payable.iter().map(|&(record, _)| record.date).min() else {
            continue;
        };
        employees_processed += 1;
        input_records += payable.len() as u32;

        let mut fresh_segments = Vec::new();
        let mut finished_rows: Vec<(Classification, &str, Decimal)> = Vec::new();

        for &(record, hours) in &payable {
            if !pay_period.contains_date(record.date) {
                continue;
            }
            let classification = classify(&record.rate_code);
            if classification.is_finished() {
                finished_rows.push((classification, record.rate_code.as_str(), hours));
                continue;
            }
            for segment in segment_record(record, &statutory_dates) {
                fresh_segments.push(RatedSegment {
                    date: segment.date,
                    hours: segment.hours,
                    rate_code: record.rate_code.clone(),
                    statutory: segment.statutory,
                });
            }
        }

        let mut buckets = allocate_employee_hours(fresh_segments);
        for (classification, code, hours) in finished_rows {
            buckets.add(classification, code, hours);
        }

        let entitlement = calculate_holiday_entitlement(employee_records, holidays);
        let mut accrued = entitlement.total_hours;
        if accrued > Decimal::ZERO && entitlement_date.is_none() {
            warn!(
                employee = %employee,
                entitlement_hours = %accrued,
                "No configured holiday falls inside the pay period; entitlement line omitted"
            );
            accrued = Decimal::ZERO;
        }

        regular_hours += buckets.regular_total();
        overtime_hours += buckets.overtime_total();
        statutory_hours += buckets.statutory_total();
        entitlement_hours += buckets.entitlement_total() + accrued;

        lines.extend(consolidate_employee(
            employee,
            first_date,
            &buckets,
            accrued,
            entitlement_date,
        ));
    }

    sort_output_lines(&mut lines);

    let stats = RunStats {
        employees_processed,
        input_records,
        output_lines: lines.len() as u32,
        regular_hours,
        overtime_hours,
        statutory_hours,
        entitlement_hours,
    };

    Ok(FinishingResult {
        run_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        pay_period: *pay_period,
        lines,
        stats,
    })
}

/// Fails the run on structural defects, identifying the offending record.
fn validate(
    records: &[ShiftRecord],
    pay_period: &PayPeriod,
    holidays: &[StatutoryHoliday],
) -> EngineResult<()> {
    if pay_period.start_date > pay_period.end_date {
        return Err(EngineError::InvalidPayPeriod {
            start_date: pay_period.start_date,
            end_date: pay_period.end_date,
        });
    }
    for holiday in holidays {
        if holiday.lookback_start > holiday.lookback_end {
            return Err(EngineError::InvalidHolidayWindow {
                holiday: holiday.name.clone(),
                message: format!(
                    "window start {} is after window end {}",
                    holiday.lookback_start, holiday.lookback_end
                ),
            });
        }
    }
    for (index, record) in records.iter().enumerate() {
        if record.employee.trim().is_empty() {
            return Err(EngineError::InvalidRecord {
                index,
                message: "employee name is empty".to_string(),
            });
        }
        if let Some(hours) = record.hours {
            if hours < Decimal::ZERO {
                return Err(EngineError::InvalidRecord {
                    index,
                    message: format!("negative duration {}", hours),
                });
            }
        }
    }
    Ok(())
}

/// Copies the batch, filling missing punch times from the keyed time-detail
/// feed. A side the record already carries is never overwritten.
fn merge_time_details(records: &[ShiftRecord], time_details: &[TimeDetail]) -> Vec<ShiftRecord> {
    if time_details.is_empty() {
        return records.to_vec();
    }

    let lookup: HashMap<(String, NaiveDate), (NaiveTime, NaiveTime)> = time_details
        .iter()
        .map(|detail| {
            (
                (detail.employee.clone(), detail.date),
                (detail.start_time, detail.end_time),
            )
        })
        .collect();

    records
        .iter()
        .map(|record| {
            let mut record = record.clone();
            if record.start_time.is_none() || record.end_time.is_none() {
                if let Some(&(start, end)) = lookup.get(&(record.employee.clone(), record.date)) {
                    record.start_time.get_or_insert(start);
                    record.end_time.get_or_insert(end);
                }
            }
            record
        })
        .collect()
}
