//! Error types for the payroll finishing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a finishing run.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll finishing engine.
///
/// Only structural problems surface as errors: a record missing its employee
/// name, a negative duration, an inverted pay period or lookback window, or
/// unreadable configuration. Data-level gaps (missing times, zero durations,
/// unrecognized rate codes) degrade gracefully and never produce an error.
///
/// # Example
///
/// ```
/// use payroll_finisher::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift record was structurally invalid.
    #[error("Invalid shift record at index {index}: {message}")]
    InvalidRecord {
        /// Zero-based position of the record in the submitted batch.
        index: usize,
        /// A description of what made the record invalid.
        message: String,
    },

    /// The pay period boundaries were inconsistent.
    #[error("Invalid pay period: start {start_date} is after end {end_date}")]
    InvalidPayPeriod {
        /// The first day of the pay period.
        start_date: NaiveDate,
        /// The last day of the pay period.
        end_date: NaiveDate,
    },

    /// A statutory holiday carried an inconsistent lookback window.
    #[error("Invalid lookback window for holiday '{holiday}': {message}")]
    InvalidHolidayWindow {
        /// The name of the offending holiday.
        holiday: String,
        /// A description of the inconsistency.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
