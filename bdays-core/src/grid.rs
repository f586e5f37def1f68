//! Month grids for the calendar view.
//!
//! A grid is a week-aligned run of cells starting on Sunday. Cells before
//! the first and after the last day of the month are `None`.
//!
//! February always gets 29 cells. In a non-leap year the 29th cell has no
//! concrete date but still exists, so leap-day birthdays have a place to go.

use chrono::{Datelike, Month, NaiveDate, Weekday};

use crate::anniversary::{AnniversaryDate, days_in_month};
use crate::birthday::Birthday;
use crate::error::InvalidDateError;

const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Column headers matching the grid layout.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently shown by a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayedMonth {
    year: i32,
    /// Zero-based month index (0 = January).
    month0: u32,
}

impl DisplayedMonth {
    /// Build from a year and a zero-based month index.
    ///
    /// Indices outside 0..12 roll over into neighbouring years, so `-1` is
    /// December of the previous year and `12` is January of the next.
    pub fn new(year: i32, month_index: i32) -> Result<Self, InvalidDateError> {
        let total = i64::from(year) * 12 + i64::from(month_index);
        let year = i32::try_from(total.div_euclid(12)).map_err(|_| InvalidDateError::Year(year))?;
        let month0 = total.rem_euclid(12) as u32;
        Ok(DisplayedMonth { year, month0 })
    }

    pub fn containing(date: NaiveDate) -> Self {
        DisplayedMonth {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index.
    pub fn month_index(&self) -> u32 {
        self.month0
    }

    pub fn month(&self) -> Month {
        Month::try_from(self.month0 as u8 + 1).unwrap_or(Month::January)
    }

    pub fn shift(&self, months: i32) -> Result<Self, InvalidDateError> {
        let index = i32::try_from(i64::from(self.month0) + i64::from(months))
            .map_err(|_| InvalidDateError::Year(self.year))?;
        DisplayedMonth::new(self.year, index)
    }

    pub fn next(&self) -> Result<Self, InvalidDateError> {
        self.shift(1)
    }

    pub fn prev(&self) -> Result<Self, InvalidDateError> {
        self.shift(-1)
    }

    /// e.g. "February 2024"
    pub fn label(&self) -> String {
        format!("{} {}", self.month().name(), self.year)
    }

    pub fn grid(&self) -> Result<CalendarGrid, InvalidDateError> {
        let month = self.month0 + 1;
        let first = NaiveDate::from_ymd_opt(self.year, month, 1).ok_or(InvalidDateError::Year(self.year))?;

        let leading = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(self.month()) as usize;
        let total = (leading + days).div_ceil(7) * 7;

        let mut cells = Vec::with_capacity(total);
        for index in 0..total {
            if index < leading || index >= leading + days {
                cells.push(None);
                continue;
            }

            let day = (index - leading + 1) as u32;
            cells.push(Some(GridDay {
                anniversary: AnniversaryDate::new(month, day)?,
                date: NaiveDate::from_ymd_opt(self.year, month, day),
                weekday: SUNDAY_FIRST[index % 7],
            }));
        }

        Ok(CalendarGrid { month: *self, cells })
    }
}

/// An in-month cell of a [`CalendarGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub anniversary: AnniversaryDate,
    /// `None` only for February 29 in a non-leap year.
    pub date: Option<NaiveDate>,
    pub weekday: Weekday,
}

impl GridDay {
    pub fn day(&self) -> u32 {
        self.anniversary.day()
    }

    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == Some(today)
    }
}

/// Week-aligned cells for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    month: DisplayedMonth,
    cells: Vec<Option<GridDay>>,
}

impl CalendarGrid {
    pub fn month(&self) -> DisplayedMonth {
        self.month
    }

    pub fn cells(&self) -> &[Option<GridDay>] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of exactly 7 cells, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<GridDay>]> {
        self.cells.chunks(7)
    }

    pub fn in_month_days(&self) -> impl Iterator<Item = &GridDay> {
        self.cells.iter().flatten()
    }
}

/// Grid for `year` and zero-based `month_index` (which may roll over).
pub fn build_month_grid(year: i32, month_index: i32) -> Result<CalendarGrid, InvalidDateError> {
    DisplayedMonth::new(year, month_index)?.grid()
}

/// Birthdays that fall on the given cell.
pub fn birthdays_on<'a>(day: &GridDay, birthdays: &'a [Birthday]) -> Vec<&'a Birthday> {
    birthdays
        .iter()
        .filter(|b| b.birth_date == day.anniversary)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_leap_february_2024() {
        let grid = build_month_grid(2024, 1).unwrap();

        // Feb 1 2024 is a Thursday
        assert!(grid.cells()[..4].iter().all(Option::is_none));
        let days: Vec<u32> = grid.in_month_days().map(GridDay::day).collect();
        assert_eq!(days, (1..=29).collect::<Vec<_>>());
        assert_eq!(grid.len(), 35);

        let first = grid.cells()[4].unwrap();
        assert_eq!(first.weekday, Weekday::Thu);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_grid_properties_hold_for_every_month() {
        for year in [1900, 2000, 2023, 2024, 2025, 2100] {
            for month_index in 0..12 {
                let grid = build_month_grid(year, month_index).unwrap();
                let month = grid.month().month();

                assert_eq!(grid.len() % 7, 0);
                assert_eq!(grid.in_month_days().count() as u32, days_in_month(month));
                assert!(grid.weeks().all(|w| w.len() == 7));

                // No whole week of padding at the end
                let last_week = grid.weeks().last().unwrap();
                assert!(last_week.iter().any(Option::is_some));
            }
        }
    }

    #[test]
    fn test_non_leap_february_keeps_leap_day_cell() {
        let grid = build_month_grid(2023, 1).unwrap();
        let last = grid.in_month_days().last().unwrap();

        assert_eq!(last.day(), 29);
        assert!(last.anniversary.is_leap_day());
        assert_eq!(last.date, None);
        assert!(grid.in_month_days().filter(|d| d.date.is_some()).count() == 28);
    }

    #[test]
    fn test_weekdays_match_real_dates() {
        let grid = build_month_grid(2025, 9).unwrap();
        for day in grid.in_month_days() {
            assert_eq!(Some(day.weekday), day.date.map(|d| d.weekday()));
        }
    }

    #[test]
    fn test_month_index_rolls_over_years() {
        let dec = DisplayedMonth::new(2025, -1).unwrap();
        assert_eq!((dec.year(), dec.month_index()), (2024, 11));

        let jan = DisplayedMonth::new(2024, 12).unwrap();
        assert_eq!((jan.year(), jan.month_index()), (2025, 0));

        let far = DisplayedMonth::new(2024, -25).unwrap();
        assert_eq!((far.year(), far.month_index()), (2021, 11));

        assert_eq!(build_month_grid(2025, -1).unwrap(), build_month_grid(2024, 11).unwrap());
    }

    #[test]
    fn test_navigation() {
        let jan = DisplayedMonth::new(2025, 0).unwrap();
        assert_eq!(jan.prev().unwrap(), DisplayedMonth::new(2024, 11).unwrap());
        assert_eq!(jan.prev().unwrap().next().unwrap(), jan);
        assert_eq!(jan.shift(14).unwrap(), DisplayedMonth::new(2026, 2).unwrap());
        assert_eq!(jan.label(), "January 2025");
        assert_eq!(
            DisplayedMonth::containing(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()),
            DisplayedMonth::new(2026, 9).unwrap()
        );
    }

    #[test]
    fn test_unrepresentable_year() {
        assert_eq!(build_month_grid(i32::MAX, 0), Err(InvalidDateError::Year(i32::MAX)));
        assert!(matches!(
            DisplayedMonth::new(i32::MAX, 12),
            Err(InvalidDateError::Year(_))
        ));
    }

    #[test]
    fn test_birthdays_on_cell() {
        let birthdays = vec![
            Birthday {
                id: "1".into(),
                name: "Ada".into(),
                birth_date: AnniversaryDate::new(2, 29).unwrap(),
                category: Category::Family,
                notes: None,
            },
            Birthday {
                id: "2".into(),
                name: "Bo".into(),
                birth_date: AnniversaryDate::new(2, 1).unwrap(),
                category: Category::Friends,
                notes: None,
            },
        ];

        let grid = build_month_grid(2023, 1).unwrap();
        let leap_cell = grid.in_month_days().last().unwrap();
        let on_leap: Vec<&str> = birthdays_on(leap_cell, &birthdays).iter().map(|b| b.name.as_str()).collect();
        assert_eq!(on_leap, vec!["Ada"]);

        let first = grid.in_month_days().next().unwrap();
        assert_eq!(birthdays_on(first, &birthdays).len(), 1);
        assert!(first.is_today(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()));
    }

    #[test]
    fn test_same_input_same_grid() {
        assert_eq!(build_month_grid(2024, 6), build_month_grid(2024, 6));
    }
}
