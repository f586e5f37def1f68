//! Error types for the bdays ecosystem.

use thiserror::Error;

/// A month/day (or year) that does not form a valid calendar date.
///
/// This is the only failure the date engine produces. Callers decide
/// whether to skip the offending record, fall back, or surface it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDateError {
    #[error("Invalid month {0}: expected 1-12")]
    Month(u32),

    #[error("Invalid day {day} for month {month}")]
    Day { month: u32, day: u32 },

    #[error("Year {0} is outside the supported calendar range")]
    Year(i32),

    #[error("Invalid date '{0}'. Expected MM-DD")]
    Format(String),
}

/// Errors that can occur in bdays operations.
#[derive(Error, Debug)]
pub enum BdaysError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid birthday: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for bdays operations.
pub type BdaysResult<T> = Result<T, BdaysError>;
