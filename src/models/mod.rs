//! Core data models for the payroll finishing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_period;
mod run_result;
mod shift;
mod union_benefit;

pub use pay_period::{PayPeriod, StatutoryHoliday};
pub use run_result::{FinishingResult, OutputLine, RunStats};
pub use shift::{ShiftRecord, TimeDetail};
pub use union_benefit::{UnionBenefitLine, UnionBenefitReport};
