use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::commands::Context;
use crate::render::Render;

pub async fn run(ctx: &Context, id: &str, force: bool) -> Result<()> {
    let client = ctx.client()?;

    let birthday = client
        .get_birthday(id)
        .await
        .with_context(|| format!("Failed to load birthday '{id}'"))?;

    if !force {
        println!("{}", birthday.render());
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this birthday?")
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    client
        .delete_birthday(id)
        .await
        .context("Failed to delete birthday")?;

    println!("{} {}", "  Deleted:".red(), birthday.name);
    Ok(())
}
