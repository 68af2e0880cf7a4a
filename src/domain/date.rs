use std::fmt;

use chrono::NaiveDate;

/// The on-disk and user-facing date format: day-month-year, no time part.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a ledger date, returning None when the text is not a real
/// dd-MM-yyyy calendar date. Dates loaded from hand-edited files may be
/// arbitrary text, so callers decide how to treat a failed parse.
pub fn parse_ledger_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

/// Validate a raw date string from user input. Strict calendar parsing:
/// overflowing days or months are rejected, never auto-corrected, so
/// "31-02-2024" fails. Returns the input unchanged on success; transactions
/// carry the date as the exact string the user typed.
pub fn validate_date(input: &str) -> Result<&str, DateError> {
    match parse_ledger_date(input) {
        Some(_) => Ok(input),
        None => Err(DateError::Invalid(input.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    Invalid(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Invalid(input) => {
                write!(f, "invalid date '{}', expected dd-MM-yyyy", input)
            }
        }
    }
}

impl std::error::Error for DateError {}
