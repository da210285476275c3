//! Configuration loading and management for the payroll finishing engine.
//!
//! This module provides functionality to load the statutory holiday calendar
//! from YAML files, including calendar metadata and per-holiday lookback
//! windows.
//!
//! # Example
//!
//! ```no_run
//! use payroll_finisher::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/statutory").unwrap();
//! println!("Loaded calendar: {}", config.calendar().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarMetadata, HolidayFile, StatutoryCalendar};
