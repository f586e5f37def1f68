use anyhow::Result;
use bdays_core::stats::DashboardStats;

use crate::commands::Context;
use crate::render::Render;

pub async fn run(ctx: &Context) -> Result<()> {
    let birthdays = ctx.fetch_birthdays().await?;
    let stats = DashboardStats::compute(&birthdays, ctx.today, ctx.config.upcoming_window_days)?;
    println!("{}", stats.render());
    Ok(())
}
