//! Shift segmentation at midnight boundaries.
//!
//! This module splits punched shifts at midnight so each calendar day's hours
//! can be flagged against the statutory holiday calendar independently. A
//! shift without usable punch times degrades to a single segment on its
//! nominal date.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::ShiftRecord;

/// One calendar day's worth of a shift.
///
/// Hours keep fractional precision; nothing is rounded at this stage.
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::DaySegment;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let segment = DaySegment {
///     date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     hours: Decimal::new(40, 1), // 4.0 hours
///     statutory: true,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    /// The calendar day this segment falls on.
    pub date: NaiveDate,
    /// Worked hours within that day.
    pub hours: Decimal,
    /// Whether the day is a configured statutory holiday.
    pub statutory: bool,
}

/// Segments a shift by calendar day.
///
/// With both punch times present, the start instant anchors on the shift
/// date; an end time strictly earlier than the start time means the shift
/// crosses midnight and ends the next day. The shift is then split at every
/// midnight boundary, one segment per day touched, each flagged against the
/// statutory calendar. In this mode the punched wall-clock duration is
/// authoritative and `total_hours` is ignored.
///
/// With either time missing, the whole `total_hours` books to the nominal
/// date as a single segment.
///
/// # Arguments
///
/// * `date` - The nominal transaction date of the shift
/// * `start_time` - Clock-in time, if punched
/// * `end_time` - Clock-out time, if punched
/// * `total_hours` - Reported duration, used only in degraded mode
/// * `statutory_dates` - The configured statutory holiday dates
///
/// # Returns
///
/// A vector of [`DaySegment`]s, ordered chronologically. Zero-length
/// segments are never emitted; a zero-length shift yields an empty vector.
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::segment_shift;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::collections::HashSet;
///
/// // An evening shift crossing into Canada Day
/// let holidays: HashSet<NaiveDate> =
///     [NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()].into();
///
/// let segments = segment_shift(
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
///     Some(NaiveTime::from_hms_opt(20, 0, 0).unwrap()),
///     Some(NaiveTime::from_hms_opt(4, 0, 0).unwrap()),
///     Decimal::new(80, 1),
///     &holidays,
/// );
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].hours, Decimal::new(40, 1)); // 4.0 before midnight
/// assert!(!segments[0].statutory);
/// assert_eq!(segments[1].hours, Decimal::new(40, 1)); // 4.0 on the holiday
/// assert!(segments[1].statutory);
/// ```
pub fn segment_shift(
    date: NaiveDate,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    total_hours: Decimal,
    statutory_dates: &HashSet<NaiveDate>,
) -> Vec<DaySegment> {
    let (Some(start), Some(end)) = (start_time, end_time) else {
        // Degraded mode: no punch pair, the whole duration stays on the
        // nominal date
        if total_hours <= Decimal::ZERO {
            return Vec::new();
        }
        return vec![DaySegment {
            date,
            hours: total_hours,
            statutory: statutory_dates.contains(&date),
        }];
    };

    let mut current_start = date.and_time(start);
    let shift_end = if end < start {
        (date + chrono::Duration::days(1)).and_time(end)
    } else {
        date.and_time(end)
    };

    let mut segments = Vec::new();

    // If the shift doesn't cross midnight, return a single segment
    if current_start.date() == shift_end.date() || current_start == shift_end {
        let hours = calculate_hours(current_start, shift_end);
        if hours > Decimal::ZERO {
            segments.push(DaySegment {
                date: current_start.date(),
                hours,
                statutory: statutory_dates.contains(&current_start.date()),
            });
        }
        return segments;
    }

    // Handle shifts crossing one or more midnights
    while current_start < shift_end {
        // Calculate midnight at the end of the current day
        let next_midnight = (current_start.date() + chrono::Duration::days(1))
            .and_hms_opt(0, 0, 0)
            .expect("Valid midnight time");

        // Segment ends at either midnight or shift end, whichever is first
        let segment_end = if next_midnight <= shift_end {
            next_midnight
        } else {
            shift_end
        };

        let hours = calculate_hours(current_start, segment_end);
        if hours > Decimal::ZERO {
            segments.push(DaySegment {
                date: current_start.date(),
                hours,
                statutory: statutory_dates.contains(&current_start.date()),
            });
        }

        current_start = segment_end;
    }

    segments
}

/// Segments one shift record against the statutory calendar.
pub fn segment_record(
    record: &ShiftRecord,
    statutory_dates: &HashSet<NaiveDate>,
) -> Vec<DaySegment> {
    segment_shift(
        record.date,
        record.start_time,
        record.end_time,
        record.hours.unwrap_or(Decimal::ZERO),
        statutory_dates,
    )
}

/// Calculates the number of hours between two datetimes.
fn calculate_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let duration_minutes = (end - start).num_minutes();
    Decimal::new(duration_minutes, 0) / Decimal::new(60, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn no_holidays() -> HashSet<NaiveDate> {
        HashSet::new()
    }

    // ==========================================================================
    // SG-001: missing punch times degrade to one segment on the nominal date
    // ==========================================================================
    #[test]
    fn test_sg_001_degraded_mode_single_segment() {
        let segments = segment_shift(
            make_date("2025-06-02"),
            None,
            None,
            dec("8.0"),
            &no_holidays(),
        );

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].date, make_date("2025-06-02"));
        assert_eq!(segments[0].hours, dec("8.0"));
        assert!(!segments[0].statutory);
    }

    // ==========================================================================
    // SG-002: degraded mode still checks the statutory calendar
    // ==========================================================================
    #[test]
    fn test_sg_002_degraded_mode_on_holiday() {
        let holidays: HashSet<NaiveDate> = [make_date("2025-07-01")].into();
        let segments = segment_shift(make_date("2025-07-01"), None, None, dec("6.0"), &holidays);

        assert_eq!(segments.len(), 1);
        assert!(segments[0].statutory);
    }

    // ==========================================================================
    // SG-003: a punched same-day shift returns a single segment
    // ==========================================================================
    #[test]
    fn test_sg_003_same_day_shift_single_segment() {
        let segments = segment_shift(
            make_date("2025-06-02"),
            Some(make_time("09:00")),
            Some(make_time("17:00")),
            dec("8.0"),
            &no_holidays(),
        );

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].date, make_date("2025-06-02"));
        assert_eq!(segments[0].hours, dec("8.0"));
    }

    // ==========================================================================
    // SG-004: overnight shift into a holiday splits with the second
    //         segment statutory
    // ==========================================================================
    #[test]
    fn test_sg_004_overnight_into_holiday() {
        let holidays: HashSet<NaiveDate> = [make_date("2025-07-01")].into();
        let segments = segment_shift(
            make_date("2025-06-30"),
            Some(make_time("20:00")),
            Some(make_time("04:00")),
            dec("8.0"),
            &holidays,
        );

        assert_eq!(segments.len(), 2);

        assert_eq!(segments[0].date, make_date("2025-06-30"));
        assert_eq!(segments[0].hours, dec("4.0"));
        assert!(!segments[0].statutory);

        assert_eq!(segments[1].date, make_date("2025-07-01"));
        assert_eq!(segments[1].hours, dec("4.0"));
        assert!(segments[1].statutory);

        let total: Decimal = segments.iter().map(|s| s.hours).sum();
        assert_eq!(total, dec("8.0"));
    }

    // ==========================================================================
    // SG-005: equal punch times are a zero-length shift
    // ==========================================================================
    #[test]
    fn test_sg_005_equal_times_yield_no_segments() {
        let segments = segment_shift(
            make_date("2025-06-02"),
            Some(make_time("09:00")),
            Some(make_time("09:00")),
            dec("8.0"),
            &no_holidays(),
        );

        assert!(segments.is_empty());
    }

    // ==========================================================================
    // SG-006: a shift ending exactly at midnight stays on one day
    // ==========================================================================
    #[test]
    fn test_sg_006_shift_ending_at_midnight() {
        let segments = segment_shift(
            make_date("2025-06-02"),
            Some(make_time("16:00")),
            Some(make_time("00:00")),
            dec("8.0"),
            &no_holidays(),
        );

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].date, make_date("2025-06-02"));
        assert_eq!(segments[0].hours, dec("8.0"));
    }

    // ==========================================================================
    // SG-007: punched wall-clock duration overrides the reported hours
    // ==========================================================================
    #[test]
    fn test_sg_007_wall_clock_overrides_reported_hours() {
        let segments = segment_shift(
            make_date("2025-06-02"),
            Some(make_time("09:00")),
            Some(make_time("17:00")),
            dec("6.0"),
            &no_holidays(),
        );

        let total: Decimal = segments.iter().map(|s| s.hours).sum();
        assert_eq!(total, dec("8.0"));
    }

    // ==========================================================================
    // SG-008: fractional hours survive the split unrounded
    // ==========================================================================
    #[test]
    fn test_sg_008_fractional_hours() {
        let segments = segment_shift(
            make_date("2025-06-02"),
            Some(make_time("21:30")),
            Some(make_time("02:15")),
            dec("4.75"),
            &no_holidays(),
        );

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].hours, dec("2.5"));
        assert_eq!(segments[1].hours, dec("2.25"));
    }

    #[test]
    fn test_segments_ordered_chronologically() {
        let segments = segment_shift(
            make_date("2025-06-30"),
            Some(make_time("20:00")),
            Some(make_time("04:00")),
            dec("8.0"),
            &no_holidays(),
        );

        for pair in segments.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_segment_record_uses_record_fields() {
        let record = ShiftRecord {
            employee: "Dana Cole".to_string(),
            date: make_date("2025-06-02"),
            start_time: None,
            end_time: None,
            hours: Some(dec("7.5")),
            rate_code: "Regular".to_string(),
            note: None,
        };

        let segments = segment_record(&record, &no_holidays());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].hours, dec("7.5"));
    }

    #[test]
    fn test_segment_record_without_hours_is_empty() {
        let record = ShiftRecord {
            employee: "Dana Cole".to_string(),
            date: make_date("2025-06-02"),
            start_time: None,
            end_time: None,
            hours: None,
            rate_code: "Regular".to_string(),
            note: None,
        };

        assert!(segment_record(&record, &no_holidays()).is_empty());
    }

    #[test]
    fn test_day_segment_serialization() {
        let segment = DaySegment {
            date: make_date("2025-07-01"),
            hours: dec("4.0"),
            statutory: true,
        };

        let json = serde_json::to_string(&segment).unwrap();
        assert!(json.contains("\"date\":\"2025-07-01\""));
        assert!(json.contains("\"hours\":\"4.0\""));
        assert!(json.contains("\"statutory\":true"));
    }

    proptest! {
        /// Segment hours always sum to the punched wall-clock duration.
        #[test]
        fn prop_segment_hours_sum_to_wall_clock(
            start_minute in 0u32..1440,
            duration_minutes in 1i64..1440,
        ) {
            let date = make_date("2025-06-02");
            let start = NaiveTime::from_num_seconds_from_midnight_opt(start_minute * 60, 0).unwrap();
            let end_instant = date.and_time(start) + chrono::Duration::minutes(duration_minutes);
            let end = end_instant.time();

            let segments = segment_shift(date, Some(start), Some(end), Decimal::ZERO, &no_holidays());

            let total: Decimal = segments.iter().map(|s| s.hours).sum();
            let expected = Decimal::new(duration_minutes, 0) / Decimal::new(60, 0);
            prop_assert_eq!(total, expected);

            // No segment is ever empty
            prop_assert!(segments.iter().all(|s| s.hours > Decimal::ZERO));
        }
    }
}
