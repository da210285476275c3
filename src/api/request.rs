//! Request types for the payroll finishing engine API.
//!
//! This module defines the JSON request structures for the `/finish` and
//! `/union-benefit` endpoints.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayPeriod, ShiftRecord, StatutoryHoliday, TimeDetail};

/// Request body for the `/finish` endpoint.
///
/// Contains the biweekly batch to finish along with the pay period and,
/// optionally, the statutory holidays to apply. When `holidays` is omitted
/// the shipped calendar is used; an explicitly empty list disables holiday
/// handling for the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishingRequest {
    /// The pay period for the run.
    pub pay_period: PayPeriodRequest,
    /// Statutory holidays with their entitlement lookback windows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<StatutoryHolidayRequest>>,
    /// The shift records to finish.
    pub records: Vec<ShiftRecordRequest>,
    /// Punch times for records that are missing them.
    #[serde(default)]
    pub time_details: Vec<TimeDetailRequest>,
}

/// Request body for the `/union-benefit` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionBenefitRequest {
    /// The shift records to report on.
    pub records: Vec<ShiftRecordRequest>,
}

/// Pay period information in a finishing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// Statutory holiday information in a finishing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatutoryHolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// The first day of the entitlement lookback window (inclusive).
    pub lookback_start: NaiveDate,
    /// The last day of the entitlement lookback window (inclusive).
    pub lookback_end: NaiveDate,
}

/// A shift record in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRecordRequest {
    /// The employee's display name.
    pub employee: String,
    /// The transaction date of the record.
    pub date: NaiveDate,
    /// Punch-in time, when known.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Punch-out time, when known.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Booked duration in hours.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// The rate-code label of the record.
    pub rate_code: String,
    /// Free-text note, scanned for a vacation percentage.
    #[serde(default)]
    pub note: Option<String>,
}

/// Punch times for one employee-day in a finishing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeDetailRequest {
    /// The employee's display name.
    pub employee: String,
    /// The calendar date of the punches.
    pub date: NaiveDate,
    /// Punch-in time.
    pub start_time: NaiveTime,
    /// Punch-out time.
    pub end_time: NaiveTime,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<StatutoryHolidayRequest> for StatutoryHoliday {
    fn from(req: StatutoryHolidayRequest) -> Self {
        StatutoryHoliday {
            date: req.date,
            name: req.name,
            lookback_start: req.lookback_start,
            lookback_end: req.lookback_end,
        }
    }
}

impl From<ShiftRecordRequest> for ShiftRecord {
    fn from(req: ShiftRecordRequest) -> Self {
        ShiftRecord {
            employee: req.employee,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            hours: req.hours,
            rate_code: req.rate_code,
            note: req.note,
        }
    }
}

impl From<TimeDetailRequest> for TimeDetail {
    fn from(req: TimeDetailRequest) -> Self {
        TimeDetail {
            employee: req.employee,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_finishing_request() {
        let json = r#"{
            "pay_period": {
                "start_date": "2025-06-01",
                "end_date": "2025-06-14"
            },
            "holidays": [
                {
                    "date": "2025-07-01",
                    "name": "Canada Day",
                    "lookback_start": "2025-05-04",
                    "lookback_end": "2025-06-30"
                }
            ],
            "records": [
                {
                    "employee": "Dana Cole",
                    "date": "2025-06-02",
                    "hours": "8.0",
                    "rate_code": "Regular"
                }
            ]
        }"#;

        let request: FinishingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records.len(), 1);
        assert_eq!(request.records[0].employee, "Dana Cole");
        assert_eq!(request.records[0].hours, Some(Decimal::new(80, 1)));
        assert!(request.records[0].start_time.is_none());
        assert_eq!(request.holidays.as_ref().map(Vec::len), Some(1));
        assert!(request.time_details.is_empty());
    }

    #[test]
    fn test_omitted_holidays_deserialize_as_none() {
        let json = r#"{
            "pay_period": { "start_date": "2025-06-01", "end_date": "2025-06-14" },
            "records": []
        }"#;

        let request: FinishingRequest = serde_json::from_str(json).unwrap();
        assert!(request.holidays.is_none());
    }

    #[test]
    fn test_empty_holidays_deserialize_as_empty_list() {
        let json = r#"{
            "pay_period": { "start_date": "2025-06-01", "end_date": "2025-06-14" },
            "holidays": [],
            "records": []
        }"#;

        let request: FinishingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.holidays.as_ref().map(Vec::len), Some(0));
    }

    #[test]
    fn test_deserialize_record_with_times() {
        let json = r#"{
            "employee": "Alex Reed",
            "date": "2025-06-30",
            "start_time": "20:00:00",
            "end_time": "04:00:00",
            "hours": "6.0",
            "rate_code": "Regular",
            "note": "includes 2% vacation"
        }"#;

        let record_req: ShiftRecordRequest = serde_json::from_str(json).unwrap();
        assert_eq!(record_req.start_time, NaiveTime::from_hms_opt(20, 0, 0));
        assert_eq!(record_req.end_time, NaiveTime::from_hms_opt(4, 0, 0));

        let record: ShiftRecord = record_req.into();
        assert!(record.has_times());
        assert_eq!(record.note.as_deref(), Some("includes 2% vacation"));
    }

    #[test]
    fn test_pay_period_conversion() {
        let req = PayPeriodRequest {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
        };

        let period: PayPeriod = req.into();
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
    }

    #[test]
    fn test_deserialize_union_benefit_request() {
        let json = r#"{
            "records": [
                { "employee": "Dana Cole", "date": "2025-06-02", "hours": "50", "rate_code": "Regular" },
                { "employee": "Dana Cole", "date": "2025-06-09", "hours": "30", "rate_code": "Regular" }
            ]
        }"#;

        let request: UnionBenefitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records.len(), 2);
        assert_eq!(request.records[1].hours, Some(Decimal::from(30)));
    }
}
