//! Union benefit cost calculation.
//!
//! An independent report over the same biweekly batch: hours split into two
//! weeks at a global boundary, capped per week, and costed at a flat hourly
//! contribution rate.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{ShiftRecord, UnionBenefitLine, UnionBenefitReport};

/// Maximum payable hours per week.
pub const WEEKLY_PAYABLE_CAP: Decimal = Decimal::from_parts(44, 0, 0, false, 0);

/// Benefit contribution per payable hour.
pub const UNION_BENEFIT_RATE: Decimal = Decimal::from_parts(80, 0, 0, false, 2);

/// Calculates the union benefit report for a biweekly batch.
///
/// The week-1 boundary is the earliest transaction date across the whole
/// batch plus six days; every employee splits against it. Rows without
/// positive hours count toward no week, and employees with no payable rows
/// are omitted. A batch with no payable rows yields an empty report with no
/// dates.
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::calculate_union_benefit;
/// use payroll_finisher::models::ShiftRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = |day: u32, hours: &str| ShiftRecord {
///     employee: "Dana Cole".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
///     start_time: None,
///     end_time: None,
///     hours: Some(Decimal::from_str(hours).unwrap()),
///     rate_code: "Regular".to_string(),
///     note: None,
/// };
///
/// let report = calculate_union_benefit(&[record(2, "50"), record(9, "30")]);
/// // Week 1 caps at 44: (44 + 30) x 0.80
/// assert_eq!(report.total_cost, Decimal::from_str("59.20").unwrap());
/// ```
pub fn calculate_union_benefit(records: &[ShiftRecord]) -> UnionBenefitReport {
    let payable: Vec<(&ShiftRecord, Decimal)> = records
        .iter()
        .filter_map(|record| record.payable_hours().map(|hours| (record, hours)))
        .collect();
    if payable.is_empty() {
        return UnionBenefitReport::default();
    }

    // The boundary anchors on every row in the batch, payable or not
    let Some(earliest_date) = records.iter().map(|record| record.date).min() else {
        return UnionBenefitReport::default();
    };
    let week1_end = earliest_date + chrono::Duration::days(6);

    let mut weekly: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();
    for (record, hours) in payable {
        let entry = weekly.entry(record.employee.as_str()).or_default();
        if record.date <= week1_end {
            entry.0 += hours;
        } else {
            entry.1 += hours;
        }
    }

    let mut total_cost = Decimal::ZERO;
    let lines: Vec<UnionBenefitLine> = weekly
        .into_iter()
        .map(|(employee, (week1_hours, week2_hours))| {
            build_line(employee, week1_hours, week2_hours, &mut total_cost)
        })
        .collect();

    UnionBenefitReport {
        earliest_date: Some(earliest_date),
        week1_end: Some(week1_end),
        lines,
        total_cost,
    }
}

fn build_line(
    employee: &str,
    week1_hours: Decimal,
    week2_hours: Decimal,
    total_cost: &mut Decimal,
) -> UnionBenefitLine {
    let week1_payable = week1_hours.min(WEEKLY_PAYABLE_CAP);
    let week2_payable = week2_hours.min(WEEKLY_PAYABLE_CAP);
    let total_payable = week1_payable + week2_payable;
    let cost = (total_payable * UNION_BENEFIT_RATE).round_dp(2);
    *total_cost += cost;

    UnionBenefitLine {
        employee: employee.to_string(),
        week1_hours: week1_hours.round_dp(2),
        week1_payable: week1_payable.round_dp(2),
        week2_hours: week2_hours.round_dp(2),
        week2_payable: week2_payable.round_dp(2),
        total_payable: total_payable.round_dp(2),
        total_cost: cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_record(employee: &str, date_str: &str, hours: &str) -> ShiftRecord {
        ShiftRecord {
            employee: employee.to_string(),
            date: make_date(date_str),
            start_time: None,
            end_time: None,
            hours: Some(dec(hours)),
            rate_code: "Regular".to_string(),
            note: None,
        }
    }

    // ==========================================================================
    // UB-001: weekly caps apply before costing
    // ==========================================================================
    #[test]
    fn test_ub_001_weekly_caps_before_costing() {
        let records = vec![
            make_record("Dana Cole", "2025-06-02", "50"),
            make_record("Dana Cole", "2025-06-09", "30"),
        ];

        let report = calculate_union_benefit(&records);

        let line = &report.lines[0];
        assert_eq!(line.week1_hours, dec("50.00"));
        assert_eq!(line.week1_payable, dec("44.00"));
        assert_eq!(line.week2_hours, dec("30.00"));
        assert_eq!(line.week2_payable, dec("30.00"));
        assert_eq!(line.total_payable, dec("74.00"));
        assert_eq!(line.total_cost, dec("59.20"));
        assert_eq!(report.total_cost, dec("59.20"));
    }

    // ==========================================================================
    // UB-002: the week-1 boundary is global across employees
    // ==========================================================================
    #[test]
    fn test_ub_002_global_week_boundary() {
        let records = vec![
            make_record("Alex Reed", "2025-06-02", "40"),
            // Starts in week 2 of the batch even though it is this
            // employee's first transaction
            make_record("Dana Cole", "2025-06-09", "40"),
        ];

        let report = calculate_union_benefit(&records);

        assert_eq!(report.earliest_date, Some(make_date("2025-06-02")));
        assert_eq!(report.week1_end, Some(make_date("2025-06-08")));

        let dana = report
            .lines
            .iter()
            .find(|line| line.employee == "Dana Cole")
            .unwrap();
        assert_eq!(dana.week1_hours, dec("0.00"));
        assert_eq!(dana.week2_hours, dec("40.00"));
    }

    // ==========================================================================
    // UB-003: the boundary day itself counts into week 1
    // ==========================================================================
    #[test]
    fn test_ub_003_boundary_day_is_week_1() {
        let records = vec![
            make_record("Dana Cole", "2025-06-02", "8"),
            make_record("Dana Cole", "2025-06-08", "8"),
            make_record("Dana Cole", "2025-06-09", "8"),
        ];

        let report = calculate_union_benefit(&records);

        let line = &report.lines[0];
        assert_eq!(line.week1_hours, dec("16.00"));
        assert_eq!(line.week2_hours, dec("8.00"));
    }

    // ==========================================================================
    // UB-004: employees with no payable rows are omitted
    // ==========================================================================
    #[test]
    fn test_ub_004_zero_hour_employees_omitted() {
        let records = vec![
            make_record("Alex Reed", "2025-06-02", "40"),
            make_record("Dana Cole", "2025-06-02", "0"),
            ShiftRecord {
                hours: None,
                ..make_record("Erin Fox", "2025-06-03", "8")
            },
        ];

        let report = calculate_union_benefit(&records);

        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].employee, "Alex Reed");
    }

    // ==========================================================================
    // UB-005: an empty batch produces an empty report
    // ==========================================================================
    #[test]
    fn test_ub_005_empty_batch() {
        let report = calculate_union_benefit(&[]);

        assert!(report.earliest_date.is_none());
        assert!(report.week1_end.is_none());
        assert!(report.lines.is_empty());
        assert_eq!(report.total_cost, Decimal::ZERO);
    }

    // ==========================================================================
    // UB-006: lines are ordered by employee and costs sum into the report
    // ==========================================================================
    #[test]
    fn test_ub_006_ordering_and_report_total() {
        let records = vec![
            make_record("Dana Cole", "2025-06-02", "40"),
            make_record("Alex Reed", "2025-06-02", "20"),
        ];

        let report = calculate_union_benefit(&records);

        let names: Vec<&str> = report
            .lines
            .iter()
            .map(|line| line.employee.as_str())
            .collect();
        assert_eq!(names, vec!["Alex Reed", "Dana Cole"]);
        // 20 x 0.80 + 40 x 0.80
        assert_eq!(report.total_cost, dec("48.00"));
    }

    #[test]
    fn test_both_weeks_capped() {
        let records = vec![
            make_record("Dana Cole", "2025-06-02", "60"),
            make_record("2nd Dana", "2025-06-02", "1"),
            make_record("Dana Cole", "2025-06-10", "50"),
        ];

        let report = calculate_union_benefit(&records);

        let dana = report
            .lines
            .iter()
            .find(|line| line.employee == "Dana Cole")
            .unwrap();
        assert_eq!(dana.total_payable, dec("88.00"));
        assert_eq!(dana.total_cost, dec("70.40"));
    }

    #[test]
    fn test_boundary_anchors_on_any_row() {
        // A zero-hour row still anchors the batch boundary
        let records = vec![
            make_record("Alex Reed", "2025-06-01", "0"),
            make_record("Dana Cole", "2025-06-03", "8"),
        ];

        let report = calculate_union_benefit(&records);

        assert_eq!(report.earliest_date, Some(make_date("2025-06-01")));
        assert_eq!(report.week1_end, Some(make_date("2025-06-07")));
        assert_eq!(report.lines.len(), 1);
    }

    #[test]
    fn test_all_zero_batch_is_empty_report() {
        let records = vec![make_record("Alex Reed", "2025-06-01", "0")];

        let report = calculate_union_benefit(&records);

        assert!(report.earliest_date.is_none());
        assert!(report.lines.is_empty());
    }
}
