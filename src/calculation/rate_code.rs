//! Rate-code interpretation logic.
//!
//! This module owns every rule about payroll rate-code labels: pricing a
//! label, deriving its overtime/statutory variant, and classifying a label
//! into the bucket it already belongs to.
//!
//! ## Label rules
//!
//! **Pricing:**
//! - `"Regular"` (case-insensitive) prices at the standard $17.60 rate
//! - A leading decimal number followed by the word `Rate` (e.g. `"21.75 Rate"`)
//!   prices at that number
//! - Anything else prices at zero, silently
//!
//! **Overtime variants** are an ordered rule list, checked top to bottom.
//! The emitted labels are exact business literals, whitespace included.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The rate code priced at the standard hourly rate.
pub const REGULAR_RATE_CODE: &str = "Regular";

/// The standard hourly rate for `"Regular"` coded hours.
pub const REGULAR_HOURLY_RATE: Decimal = Decimal::from_parts(1760, 0, 0, false, 2);

/// Overtime/statutory variant emitted for `"Regular"` coded hours.
pub const REGULAR_OVERTIME_CODE: &str = "Hourly Overtime /STAT";

/// Overtime/statutory variant emitted for codes carrying the 21.75 rate.
/// Deliberately has no space after the slash.
pub const RATE_2175_OVERTIME_CODE: &str = "21.75 Rate OT/STAT";

/// Suffix appended to all other codes when they flip to overtime/statutory.
pub const OT_STAT_SUFFIX: &str = " OT/ STAT";

/// Compact spelling of the suffix seen in older exports; stripped on input,
/// never emitted.
pub const OT_STAT_SUFFIX_COMPACT: &str = " OT/STAT";

/// The bucket a rate-code label already belongs to.
///
/// Assigned exactly once per record on ingest; downstream stages route on the
/// enum instead of re-probing label substrings. `Unclassified` rows are the
/// only ones eligible for the threshold split.
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::{classify, Classification};
///
/// assert_eq!(classify("Regular"), Classification::Unclassified);
/// assert_eq!(classify("PHP (Holiday)"), Classification::Entitlement);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Fresh worked hours, still to be split against the threshold.
    Unclassified,
    /// Hours under the 88-hour biweekly threshold.
    Regular,
    /// Hours over the threshold, or rows already tagged with an OT marker.
    Overtime,
    /// Hours worked on a statutory holiday, or rows already tagged STAT.
    Statutory,
    /// Holiday entitlement hours (PHP), computed or passed through.
    Entitlement,
}

impl Classification {
    /// Returns true when the label was already finished on input and must
    /// pass through unmodified.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Classification::Unclassified)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Unclassified => write!(f, "Unclassified"),
            Classification::Regular => write!(f, "Regular"),
            Classification::Overtime => write!(f, "Overtime"),
            Classification::Statutory => write!(f, "Statutory"),
            Classification::Entitlement => write!(f, "Entitlement"),
        }
    }
}

/// Prices a rate-code label in dollars per hour.
///
/// Unrecognized labels price at zero without an error: the upstream export
/// routinely carries tracking-only codes that must not abort a run.
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::rate_for;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(rate_for("Regular"), Decimal::from_str("17.60").unwrap());
/// assert_eq!(rate_for("21.75 Rate"), Decimal::from_str("21.75").unwrap());
/// assert_eq!(rate_for("Banked Time"), Decimal::ZERO);
/// ```
pub fn rate_for(code: &str) -> Decimal {
    let trimmed = code.trim();
    if trimmed.eq_ignore_ascii_case(REGULAR_RATE_CODE) {
        return REGULAR_HOURLY_RATE;
    }
    leading_rate(trimmed).unwrap_or(Decimal::ZERO)
}

/// Parses the `"21.75 Rate"` label shape: a leading decimal number, a
/// whitespace separator, then the word `Rate`.
fn leading_rate(code: &str) -> Option<Decimal> {
    let number_end = code
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(code.len());
    if number_end == 0 {
        return None;
    }

    let (number, rest) = code.split_at(number_end);
    let after_separator = rest.trim_start();
    if after_separator.len() == rest.len() {
        // No separator between the number and the rest of the label
        return None;
    }
    if !after_separator
        .get(..4)
        .is_some_and(|word| word.eq_ignore_ascii_case("rate"))
    {
        return None;
    }

    Decimal::from_str(number).ok()
}

/// Derives the overtime/statutory variant of a rate-code label.
///
/// The rules are an ordered list and the first match wins:
/// 1. `"Regular"` maps to the fixed `"Hourly Overtime /STAT"` literal
/// 2. A code containing `21.75` with no OT marker maps to the fixed
///    `"21.75 Rate OT/STAT"` literal
/// 3. Everything else gets the `" OT/ STAT"` suffix, after stripping any
///    suffix variant it already carries
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::overtime_variant;
///
/// assert_eq!(overtime_variant("Regular"), "Hourly Overtime /STAT");
/// assert_eq!(overtime_variant("21.75 Rate"), "21.75 Rate OT/STAT");
/// assert_eq!(overtime_variant("Supervisor"), "Supervisor OT/ STAT");
/// ```
pub fn overtime_variant(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.eq_ignore_ascii_case(REGULAR_RATE_CODE) {
        return REGULAR_OVERTIME_CODE.to_string();
    }
    if trimmed.contains("21.75") && !trimmed.contains("OT/") {
        return RATE_2175_OVERTIME_CODE.to_string();
    }
    format!("{}{}", strip_overtime_suffix(trimmed), OT_STAT_SUFFIX)
}

/// Strips a trailing overtime/statutory suffix in either spelling.
fn strip_overtime_suffix(code: &str) -> &str {
    for suffix in [OT_STAT_SUFFIX, OT_STAT_SUFFIX_COMPACT] {
        if let Some(base) = code.strip_suffix(suffix) {
            return base;
        }
    }
    code
}

/// Classifies a rate-code label into the bucket it already belongs to.
///
/// Labels carrying a PHP, OT, or STAT marker are finished: they pass through
/// the run unmodified and never re-enter the threshold split.
pub fn classify(code: &str) -> Classification {
    if code.contains("PHP") {
        Classification::Entitlement
    } else if code.contains("OT/") {
        Classification::Overtime
    } else if code.contains("STAT") {
        Classification::Statutory
    } else {
        Classification::Unclassified
    }
}
