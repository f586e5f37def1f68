use anyhow::Result;
use bdays_core::DisplayedMonth;
use owo_colors::OwoColorize;

use crate::commands::Context;
use crate::render::render_grid;

/// Which month to show, relative to today unless given explicitly.
pub struct MonthSelection {
    /// 1-based month
    pub month: Option<u32>,
    pub year: Option<i32>,
    /// Months to move forward (or back, if negative) from the selection
    pub offset: i32,
}

impl MonthSelection {
    pub fn resolve(&self, current: DisplayedMonth) -> Result<DisplayedMonth> {
        let year = self.year.unwrap_or(current.year());
        let month_index = match self.month {
            Some(m) if (1..=12).contains(&m) => m as i32 - 1,
            Some(m) => anyhow::bail!("Invalid month {m}: expected 1-12"),
            None => current.month_index() as i32,
        };
        Ok(DisplayedMonth::new(year, month_index)?.shift(self.offset)?)
    }
}

pub async fn run(ctx: &Context, selection: MonthSelection) -> Result<()> {
    let shown = selection.resolve(DisplayedMonth::containing(ctx.today))?;
    let grid = shown.grid()?;

    let birthdays = ctx.fetch_birthdays().await?;
    if birthdays.is_empty() {
        println!("{}", "Your calendar is empty".bold());
        println!("{}", "Add your first birthday to see it on the calendar".dimmed());
        return Ok(());
    }

    println!("{}", render_grid(&grid, &birthdays, ctx.today));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> DisplayedMonth {
        DisplayedMonth::new(2026, 9).unwrap()
    }

    #[test]
    fn test_defaults_to_current_month() {
        let selection = MonthSelection { month: None, year: None, offset: 0 };
        assert_eq!(selection.resolve(current()).unwrap(), current());
    }

    #[test]
    fn test_offset_wraps_years() {
        let selection = MonthSelection { month: None, year: None, offset: 3 };
        assert_eq!(selection.resolve(current()).unwrap(), DisplayedMonth::new(2027, 0).unwrap());

        let selection = MonthSelection { month: Some(1), year: Some(2025), offset: -1 };
        assert_eq!(selection.resolve(current()).unwrap(), DisplayedMonth::new(2024, 11).unwrap());
    }

    #[test]
    fn test_explicit_month_is_validated() {
        let selection = MonthSelection { month: Some(13), year: None, offset: 0 };
        assert!(selection.resolve(current()).is_err());
    }
}
