//! Calculation logic for the payroll finishing engine.
//!
//! This module contains all the calculation functions of the finishing run,
//! including rate-code interpretation and classification, vacation
//! percentage extraction from free-text notes, calendar-midnight shift
//! segmentation, biweekly overtime-threshold allocation, statutory-holiday
//! entitlement accrual, union benefit costing, and output consolidation.

mod aggregation;
mod finishing;
mod holiday_entitlement;
mod overtime;
mod rate_code;
mod segmentation;
mod union_benefit;
mod vacation;

pub use aggregation::{
    OUTPUT_BILLABLE, OUTPUT_CUSTOMER, OUTPUT_SERVICE_ITEM, consolidate_employee,
    sort_output_lines,
};
pub use finishing::run_finishing;
pub use holiday_entitlement::{
    EntitlementResult, HolidayContribution, LOOKBACK_HOURS_CAP, PHP_RATE_CODE,
    calculate_holiday_entitlement,
};
pub use overtime::{
    BIWEEKLY_OVERTIME_THRESHOLD, HourBuckets, RatedSegment, allocate_employee_hours,
};
pub use rate_code::{
    Classification, REGULAR_HOURLY_RATE, REGULAR_OVERTIME_CODE, REGULAR_RATE_CODE, classify,
    overtime_variant, rate_for,
};
pub use segmentation::{DaySegment, segment_record, segment_shift};
pub use union_benefit::{UNION_BENEFIT_RATE, WEEKLY_PAYABLE_CAP, calculate_union_benefit};
pub use vacation::{
    DEFAULT_VACATION_PERCENT, extract_vacation_percent, max_vacation_percent, vacation_percent,
};
