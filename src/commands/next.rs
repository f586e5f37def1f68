use anyhow::Result;
use bdays_core::offset::{next_occurrence, next_occurrence_offset};
use bdays_core::overview::format_days_text;
use owo_colors::OwoColorize;

use crate::commands::Context;

/// Birthdays ordered by their next occurrence, looking `limit` entries ahead.
pub async fn run(ctx: &Context, limit: usize) -> Result<()> {
    let birthdays = ctx.fetch_birthdays().await?;

    let mut upcoming = Vec::with_capacity(birthdays.len());
    for b in &birthdays {
        let days = next_occurrence_offset(&b.birth_date, ctx.today)?;
        let date = next_occurrence(&b.birth_date, ctx.today)?;
        upcoming.push((days, date, b));
    }
    upcoming.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.2.name.cmp(&b.2.name)));

    if upcoming.is_empty() {
        println!("{}", "No birthdays yet. Add one with `bdays add`".dimmed());
        return Ok(());
    }

    for (days, date, b) in upcoming.into_iter().take(limit) {
        let when = date.format("%a %b %-d %Y").to_string();
        let text = format_days_text(days);
        let text = if days <= ctx.config.highlight_days {
            text.reversed().bold().to_string()
        } else {
            text
        };
        println!("{:<16} {} {:<24} {}", when.dimmed(), b.category.icon(), b.name, text);
    }

    Ok(())
}
