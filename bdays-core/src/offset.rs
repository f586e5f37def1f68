//! Day offsets between a reference date and an anniversary.
//!
//! Two policies exist for an anniversary that already passed this year:
//! - [`signed_offset`] reports it as a negative number of days (list view)
//! - [`next_occurrence_offset`] rolls over to next year's occurrence
//!
//! Both take `today` explicitly; nothing here reads the system clock.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::anniversary::AnniversaryDate;
use crate::error::InvalidDateError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Whole days from `from` to `to`, rounding any partial day up.
///
/// A target 1 second in the future counts as 1 day away; a target
/// 1.5 days in the past counts as -1.
pub fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let seconds = (to - from).num_seconds();
    let whole = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
        whole + 1
    } else {
        whole
    }
}

fn days_between_dates(from: NaiveDate, to: NaiveDate) -> i64 {
    days_between(from.and_time(Default::default()), to.and_time(Default::default()))
}

/// Signed days from `today` to this year's occurrence of `anniversary`.
///
/// 0 means today, positive means still ahead this year, negative means it
/// already passed this year.
pub fn signed_offset(anniversary: &AnniversaryDate, today: NaiveDate) -> Result<i64, InvalidDateError> {
    let this_year = anniversary.occurrence_in(today.year())?;
    Ok(days_between_dates(today, this_year))
}

/// Days from `today` until the next occurrence of `anniversary` (never negative).
pub fn next_occurrence_offset(
    anniversary: &AnniversaryDate,
    today: NaiveDate,
) -> Result<i64, InvalidDateError> {
    let next = next_occurrence(anniversary, today)?;
    Ok(days_between_dates(today, next))
}

/// The date of the next occurrence on or after `today`.
pub fn next_occurrence(anniversary: &AnniversaryDate, today: NaiveDate) -> Result<NaiveDate, InvalidDateError> {
    let this_year = anniversary.occurrence_in(today.year())?;
    if this_year >= today {
        return Ok(this_year);
    }

    let next_year = today
        .year()
        .checked_add(1)
        .ok_or(InvalidDateError::Year(today.year()))?;
    anniversary.occurrence_in(next_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn anniversary(m: u32, d: u32) -> AnniversaryDate {
        AnniversaryDate::new(m, d).unwrap()
    }

    #[test]
    fn test_signed_offset_upcoming_this_year() {
        assert_eq!(signed_offset(&anniversary(12, 25), date(2024, 12, 20)).unwrap(), 5);
    }

    #[test]
    fn test_already_passed_policies_diverge() {
        let new_year = anniversary(1, 1);
        let today = date(2024, 12, 20);

        assert_eq!(signed_offset(&new_year, today).unwrap(), -354);
        assert_eq!(next_occurrence_offset(&new_year, today).unwrap(), 12);
        assert_eq!(next_occurrence(&new_year, today).unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn test_today_is_zero_for_both_policies() {
        let today = date(2025, 6, 15);
        let a = anniversary(6, 15);
        assert_eq!(signed_offset(&a, today).unwrap(), 0);
        assert_eq!(next_occurrence_offset(&a, today).unwrap(), 0);
    }

    #[test]
    fn test_leap_day_falls_back_to_feb_28() {
        let leap_day = anniversary(2, 29);

        assert_eq!(signed_offset(&leap_day, date(2023, 2, 28)).unwrap(), 0);
        assert_eq!(signed_offset(&leap_day, date(2023, 3, 1)).unwrap(), -1);
        assert_eq!(signed_offset(&leap_day, date(2024, 2, 28)).unwrap(), 1);
        assert_eq!(signed_offset(&leap_day, date(2024, 2, 29)).unwrap(), 0);

        // From March 2023 the next occurrence is the real leap day in 2024
        assert_eq!(next_occurrence(&leap_day, date(2023, 3, 1)).unwrap(), date(2024, 2, 29));
        assert_eq!(next_occurrence_offset(&leap_day, date(2023, 3, 1)).unwrap(), 365);
    }

    #[test]
    fn test_signed_offset_zero_only_on_the_day() {
        let a = anniversary(8, 3);
        let mut today = date(2026, 1, 1);
        while today.year() == 2026 {
            let offset = signed_offset(&a, today).unwrap();
            assert_eq!(offset == 0, a.matches(today), "mismatch on {today}");
            today += Duration::days(1);
        }
    }

    #[test]
    fn test_next_occurrence_offset_bounds() {
        let anniversaries = [anniversary(1, 1), anniversary(2, 29), anniversary(7, 31), anniversary(12, 31)];

        for year in [2023, 2024] {
            let mut today = date(year, 1, 1);
            while today.year() == year {
                for a in &anniversaries {
                    let next = next_occurrence_offset(a, today).unwrap();
                    assert!((0..=366).contains(&next), "{a} from {today}: {next}");

                    let signed = signed_offset(a, today).unwrap();
                    assert!((-366..=366).contains(&signed), "{a} from {today}: {signed}");
                }
                today += Duration::days(1);
            }
        }
    }

    #[test]
    fn test_days_between_rounds_partial_days_up() {
        let start = date(2024, 1, 1).and_hms_opt(12, 0, 0).unwrap();

        assert_eq!(days_between(start, start), 0);
        assert_eq!(days_between(start, start + Duration::seconds(1)), 1);
        assert_eq!(days_between(start, start + Duration::hours(24)), 1);
        assert_eq!(days_between(start, start + Duration::hours(25)), 2);
        assert_eq!(days_between(start, start - Duration::hours(36)), -1);
        assert_eq!(days_between(start, start - Duration::hours(48)), -2);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let a = anniversary(9, 30);
        let today = date(2025, 10, 19);
        assert_eq!(signed_offset(&a, today), signed_offset(&a, today));
        assert_eq!(next_occurrence_offset(&a, today), next_occurrence_offset(&a, today));
    }

    #[test]
    fn test_out_of_range_year_is_reported() {
        let a = anniversary(1, 1);
        assert_eq!(
            next_occurrence(&a, NaiveDate::MAX),
            Err(InvalidDateError::Year(NaiveDate::MAX.year() + 1))
        );
    }
}
