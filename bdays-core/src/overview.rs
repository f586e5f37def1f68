//! The birthday list: search, category filter and upcoming/past ordering.

use chrono::NaiveDate;

use crate::birthday::Birthday;
use crate::category::CategoryFilter;
use crate::error::InvalidDateError;
use crate::offset::signed_offset;

/// Days ahead within which a birthday is highlighted.
pub const DEFAULT_HIGHLIGHT_DAYS: i64 = 7;

/// Filters applied to the list view.
#[derive(Debug, Clone, Default)]
pub struct OverviewQuery {
    pub search: Option<String>,
    pub category: CategoryFilter,
}

impl OverviewQuery {
    pub fn matches(&self, birthday: &Birthday) -> bool {
        let name_matches = match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => birthday.name.to_lowercase().contains(&q.to_lowercase()),
            _ => true,
        };
        name_matches && self.category.matches(birthday.category)
    }
}

/// A birthday paired with its signed day offset.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewEntry {
    pub birthday: Birthday,
    pub days_until: i64,
}

impl OverviewEntry {
    pub fn is_past(&self) -> bool {
        self.days_until < 0
    }

    pub fn is_soon(&self, highlight_days: i64) -> bool {
        (0..=highlight_days).contains(&self.days_until)
    }

    pub fn days_text(&self) -> String {
        format_days_text(self.days_until)
    }
}

/// Filter `birthdays` and order them for display.
///
/// Upcoming birthdays (including today) come first, closest first. Those
/// already past this year follow, most recently passed first.
pub fn overview(
    birthdays: &[Birthday],
    query: &OverviewQuery,
    today: NaiveDate,
) -> Result<Vec<OverviewEntry>, InvalidDateError> {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();

    for birthday in birthdays.iter().filter(|b| query.matches(b)) {
        let days_until = signed_offset(&birthday.birth_date, today)?;
        let entry = OverviewEntry {
            birthday: birthday.clone(),
            days_until,
        };
        if days_until >= 0 {
            upcoming.push(entry);
        } else {
            past.push(entry);
        }
    }

    upcoming.sort_by_key(|e| e.days_until);
    past.sort_by_key(|e| std::cmp::Reverse(e.days_until));

    upcoming.extend(past);
    Ok(upcoming)
}

/// "Today!", "3 days left", "1 day past", ...
pub fn format_days_text(days_until: i64) -> String {
    let n = days_until.abs();
    let unit = if n == 1 { "day" } else { "days" };
    match days_until {
        0 => "Today!".to_string(),
        d if d > 0 => format!("{n} {unit} left"),
        _ => format!("{n} {unit} past"),
    }
}
