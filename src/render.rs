//! TUI rendering for bdays types.
//!
//! Extension traits and helpers that turn bdays-core values into colored
//! terminal output using owo_colors.

use bdays_core::grid::{CalendarGrid, WEEKDAY_HEADERS, birthdays_on};
use bdays_core::overview::OverviewEntry;
use bdays_core::stats::DashboardStats;
use bdays_core::{Birthday, Category};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Width of one calendar cell, including its separating space.
const CELL_WIDTH: usize = 5;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        format!("{} {}", self.icon(), self.key()).dimmed().to_string()
    }
}

impl Render for Birthday {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.name.bold(),
            self.birth_date.long_label(),
            format!("[{}]", self.id).dimmed()
        )
    }
}

/// One row of the birthday list.
pub fn render_entry(entry: &OverviewEntry, highlight_days: i64) -> String {
    let b = &entry.birthday;
    let days = entry.days_text();

    let badge = if entry.is_soon(highlight_days) {
        days.reversed().bold().to_string()
    } else {
        days
    };

    let line = format!(
        "{:<24} {:<14} {}  {}",
        b.name,
        b.birth_date.long_label(),
        b.category.render(),
        badge
    );

    let line = if entry.is_past() {
        line.dimmed().to_string()
    } else {
        line
    };

    match &b.notes {
        Some(notes) => format!("{}\n    {}", line, notes.italic().dimmed()),
        None => line,
    }
}

/// Month grid with a marker on every day that has birthdays, followed by
/// the names for each of those days.
pub fn render_grid(grid: &CalendarGrid, birthdays: &[Birthday], today: NaiveDate) -> String {
    let mut lines = Vec::new();

    let title = grid.month().label();
    lines.push(format!("{:^width$}", title, width = CELL_WIDTH * 7).bold().to_string());
    lines.push(
        WEEKDAY_HEADERS
            .iter()
            .map(|h| format!("{:>4} ", h))
            .collect::<String>()
            .dimmed()
            .to_string(),
    );

    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                None => " ".repeat(CELL_WIDTH),
                Some(day) => {
                    let count = birthdays_on(day, birthdays).len();
                    let marker = if count > 0 { "*" } else { " " };
                    let text = format!("{:>3}{}", day.day(), marker);
                    let text = if day.is_today(today) {
                        text.reversed().to_string()
                    } else if count > 0 {
                        text.bold().to_string()
                    } else {
                        text
                    };
                    format!("{} ", text)
                }
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    let mut listed = false;
    for day in grid.in_month_days() {
        let on_day = birthdays_on(day, birthdays);
        if on_day.is_empty() {
            continue;
        }
        if !listed {
            lines.push(String::new());
            listed = true;
        }
        let names: Vec<String> = on_day
            .iter()
            .map(|b| format!("{} {}", b.category.icon(), b.name))
            .collect();
        lines.push(format!("{:>4}  {}", day.day().bold(), names.join(", ")));
    }

    if !listed {
        lines.push(String::new());
        lines.push("No birthdays this month".dimmed().to_string());
    }

    lines.join("\n")
}

impl Render for DashboardStats {
    fn render(&self) -> String {
        [
            ("Total birthdays", self.total),
            ("Upcoming", self.upcoming),
            ("This month", self.this_month),
            ("Categories", self.categories),
        ]
        .iter()
        .map(|(label, value)| format!("{:<18}{}", label.dimmed(), value.bold()))
        .collect::<Vec<_>>()
        .join("\n")
    }
}
