//! Recurring month/day dates.
//!
//! An anniversary has no year of its own. It is validated against a leap
//! year so that February 29 is always representable, and only becomes a
//! concrete [`NaiveDate`] once a year is supplied.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::InvalidDateError;

/// A recurring calendar date (e.g. a birthday) without a year.
///
/// Serialized as `MM-DD`, the format the birthday API stores in `birth_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnniversaryDate {
    month: u32,
    day: u32,
}

impl AnniversaryDate {
    pub fn new(month: u32, day: u32) -> Result<Self, InvalidDateError> {
        let max_day = days_in_month_number(month)?;
        if day == 0 || day > max_day {
            return Err(InvalidDateError::Day { month, day });
        }
        Ok(AnniversaryDate { month, day })
    }

    /// The anniversary of a concrete date (the year is dropped).
    pub fn of(date: NaiveDate) -> Self {
        AnniversaryDate {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// The concrete date this anniversary falls on in `year`.
    ///
    /// February 29 falls back to February 28 in non-leap years. The only
    /// failure is a `year` outside chrono's representable range.
    pub fn occurrence_in(&self, year: i32) -> Result<NaiveDate, InvalidDateError> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| {
                if self.is_leap_day() {
                    NaiveDate::from_ymd_opt(year, 2, 28)
                } else {
                    None
                }
            })
            .ok_or(InvalidDateError::Year(year))
    }

    /// True when `date` has this anniversary's month and day.
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }

    /// Human-readable label, e.g. "December 25".
    pub fn long_label(&self) -> String {
        format!("{} {}", month_of(self.month).name(), self.day)
    }
}

impl fmt::Display for AnniversaryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for AnniversaryDate {
    type Err = InvalidDateError;

    /// Parse `MM-DD` (leading zeros optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || InvalidDateError::Format(s.to_string());

        let (month, day) = s.trim().split_once('-').ok_or_else(format_err)?;
        let month: u32 = month.trim().parse().map_err(|_| format_err())?;
        let day: u32 = day.trim().parse().map_err(|_| format_err())?;

        AnniversaryDate::new(month, day)
    }
}

impl TryFrom<String> for AnniversaryDate {
    type Error = InvalidDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AnniversaryDate> for String {
    fn from(value: AnniversaryDate) -> Self {
        value.to_string()
    }
}

/// Number of days in `month`, always counted in a leap year.
///
/// February is 29 days so that a stored Feb 29 anniversary is never
/// rejected when no concrete year is involved.
pub fn days_in_month(month: Month) -> u32 {
    match month {
        Month::February => 29,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// [`days_in_month`] for a raw 1-based month number.
pub fn days_in_month_number(month: u32) -> Result<u32, InvalidDateError> {
    let m = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(InvalidDateError::Month(month))?;
    Ok(days_in_month(m))
}

/// Month from a 1-based number already known to be valid.
fn month_of(month: u32) -> Month {
    Month::try_from(month as u8).unwrap_or(Month::January)
}
