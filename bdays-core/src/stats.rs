//! Dashboard summary numbers.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::birthday::Birthday;
use crate::error::InvalidDateError;
use crate::offset::next_occurrence_offset;

/// Default look-ahead for the "upcoming" count.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    /// Next occurrence within the window (today included).
    pub upcoming: usize,
    /// Falling in the same calendar month as today.
    pub this_month: usize,
    /// Distinct categories in use.
    pub categories: usize,
}

impl DashboardStats {
    pub fn compute(
        birthdays: &[Birthday],
        today: NaiveDate,
        window_days: i64,
    ) -> Result<Self, InvalidDateError> {
        let mut upcoming = 0;
        for b in birthdays {
            if next_occurrence_offset(&b.birth_date, today)? <= window_days {
                upcoming += 1;
            }
        }

        let this_month = birthdays
            .iter()
            .filter(|b| b.birth_date.month() == today.month())
            .count();

        let categories = birthdays.iter().map(|b| b.category).collect::<HashSet<_>>().len();

        Ok(DashboardStats {
            total: birthdays.len(),
            upcoming,
            this_month,
            categories,
        })
    }
}
