//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::StatutoryHoliday;

use super::types::{CalendarMetadata, HolidayFile, StatutoryCalendar};

/// Loads and provides access to the statutory holiday calendar.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the holiday set a finishing request falls back to when it does
/// not carry its own.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/statutory/
/// ├── calendar.yaml    # Calendar metadata
/// └── holidays/
///     ├── 2025.yaml    # Holiday entries with lookback windows
///     └── 2026.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_finisher::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory").unwrap();
/// println!("Calendar: {}", loader.calendar().metadata().name);
/// println!("Holidays configured: {}", loader.holidays().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    calendar: StatutoryCalendar,
}

impl ConfigLoader {
    /// Loads the calendar from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/statutory")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_finisher::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/statutory")?;
    /// # Ok::<(), payroll_finisher::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load calendar.yaml
        let calendar_path = path.join("calendar.yaml");
        let metadata = Self::load_yaml::<CalendarMetadata>(&calendar_path)?;

        // Load all holiday files from the holidays directory
        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;

        Ok(Self {
            calendar: StatutoryCalendar::new(metadata, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<StatutoryHoliday>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file = Self::load_yaml::<HolidayFile>(&path)?;
                holidays.extend(file.holidays);
            }
        }

        if holidays.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }

        Ok(holidays)
    }

    /// Returns the loaded calendar.
    pub fn calendar(&self) -> &StatutoryCalendar {
        &self.calendar
    }

    /// Returns the configured holidays, ordered by date.
    pub fn holidays(&self) -> &[StatutoryHoliday] {
        self.calendar.holidays()
    }
}
