//! Vacation percentage extraction from free-text notes.
//!
//! Shift records carry an optional note column where payroll clerks record a
//! non-standard vacation accrual ("vac 6%", "Vacation pay 5.5 percent").
//! This module scans those notes; anything without a recognizable percentage
//! falls back to the standard 4% accrual.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// The standard vacation accrual applied when no note overrides it.
pub const DEFAULT_VACATION_PERCENT: Decimal = Decimal::from_parts(4, 0, 0, false, 2);

/// Matches a number followed by `%` or the word `percent`, anywhere in the
/// note, case-insensitively.
static PERCENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:%|percent)").expect("valid percent pattern")
});

/// Extracts a vacation percentage from a note, as a fraction.
///
/// Returns `None` when the note carries no recognizable percentage. The
/// first match wins when a note mentions several.
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::extract_vacation_percent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     extract_vacation_percent("vac 6%"),
///     Some(Decimal::from_str("0.06").unwrap())
/// );
/// assert_eq!(extract_vacation_percent("called in sick Tuesday"), None);
/// ```
pub fn extract_vacation_percent(note: &str) -> Option<Decimal> {
    let captures = PERCENT_PATTERN.captures(note)?;
    let number = Decimal::from_str(captures.get(1)?.as_str()).ok()?;
    Some(number / Decimal::ONE_HUNDRED)
}

/// Vacation percentage for a single optional note, with the standard default.
///
/// # Example
///
/// ```
/// use payroll_finisher::calculation::vacation_percent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     vacation_percent(Some("Vacation pay 5.5 percent")),
///     Decimal::from_str("0.055").unwrap()
/// );
/// assert_eq!(vacation_percent(None), Decimal::from_str("0.04").unwrap());
/// ```
pub fn vacation_percent(note: Option<&str>) -> Decimal {
    note.and_then(extract_vacation_percent)
        .unwrap_or(DEFAULT_VACATION_PERCENT)
}

/// The maximum percentage actually found across a set of notes, or the
/// standard default when none of them carries one.
///
/// An employee's entitlement uses the highest accrual recorded anywhere in
/// their qualifying rows, so a single annotated row lifts the whole window.
pub fn max_vacation_percent<'a, I>(notes: I) -> Decimal
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    notes
        .into_iter()
        .flatten()
        .filter_map(extract_vacation_percent)
        .max()
        .unwrap_or(DEFAULT_VACATION_PERCENT)
}
