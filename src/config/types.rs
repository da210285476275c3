//! Configuration types for the statutory holiday calendar.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::StatutoryHoliday;

/// Metadata about the holiday calendar.
///
/// Identifies the jurisdiction and vintage of the shipped calendar so a
/// request that relies on the default holidays is traceable to a source.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// The human-readable name of the calendar.
    pub name: String,
    /// The jurisdiction the calendar applies to (e.g., "BC").
    pub region: String,
    /// The version or effective year of the calendar.
    pub version: String,
}

/// Structure of a holidays file under `holidays/`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// Holiday entries, each with its own lookback window.
    pub holidays: Vec<StatutoryHoliday>,
}

/// The complete statutory holiday calendar loaded from YAML files.
#[derive(Debug, Clone)]
pub struct StatutoryCalendar {
    /// Calendar metadata.
    metadata: CalendarMetadata,
    /// Configured holidays (sorted by date).
    holidays: Vec<StatutoryHoliday>,
}

impl StatutoryCalendar {
    /// Creates a new StatutoryCalendar from its component parts.
    pub fn new(metadata: CalendarMetadata, holidays: Vec<StatutoryHoliday>) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            metadata,
            holidays: sorted_holidays,
        }
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns all configured holidays, ordered by date.
    pub fn holidays(&self) -> &[StatutoryHoliday] {
        &self.holidays
    }
}
