use anyhow::Result;
use bdays_core::CategoryFilter;
use bdays_core::overview::{OverviewQuery, overview};
use owo_colors::OwoColorize;

use crate::commands::Context;
use crate::render::render_entry;

pub async fn run(ctx: &Context, search: Option<String>, category: CategoryFilter) -> Result<()> {
    let birthdays = ctx.fetch_birthdays().await?;

    let query = OverviewQuery { search, category };
    let entries = overview(&birthdays, &query, ctx.today)?;

    println!("{} {}", category.icon(), category.label().bold());

    if entries.is_empty() {
        println!("{}", "No birthdays found".dimmed());
        if !birthdays.is_empty() {
            println!("{}", "Try adjusting your search or filters".dimmed());
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", render_entry(entry, ctx.config.highlight_days));
    }

    Ok(())
}
