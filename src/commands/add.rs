use anyhow::{Context as _, Result};
use bdays_core::{AnniversaryDate, BirthdayInput, Category, days_in_month_number};
use chrono::Month;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::commands::Context;
use crate::render::Render;

pub async fn run(
    ctx: &Context,
    name: Option<String>,
    date: Option<AnniversaryDate>,
    category: Option<Category>,
    notes: Option<String>,
) -> Result<()> {
    let interactive = name.is_none() || date.is_none();

    let defaults = BirthdayInput::new(
        name.unwrap_or_default(),
        date.unwrap_or_else(|| AnniversaryDate::of(ctx.today)),
        category.unwrap_or(ctx.config.default_category),
    )
    .with_notes(notes);

    let input = if interactive {
        prompt_birthday(&defaults)?
    } else {
        defaults
    };
    input.validate()?;

    let created = ctx
        .client()?
        .create_birthday(&input)
        .await
        .context("Failed to create birthday")?;

    if interactive {
        println!();
    }
    println!("{} {}", "  Added:".green(), created.render());
    Ok(())
}

/// Ask for every field, offering the values in `defaults`.
pub fn prompt_birthday(defaults: &BirthdayInput) -> Result<BirthdayInput> {
    let mut name = Input::<String>::new().with_prompt("  Name");
    if !defaults.name.is_empty() {
        name = name.default(defaults.name.clone());
    }
    let name = name.interact_text()?;

    let months: Vec<&str> = (1..=12u8)
        .filter_map(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .collect();
    let month = Select::new()
        .with_prompt("  Month")
        .items(&months)
        .default(defaults.birth_date.month() as usize - 1)
        .interact()? as u32
        + 1;

    let max_day = days_in_month_number(month)?;
    let day: u32 = Input::new()
        .with_prompt(format!("  Day (1-{max_day})"))
        .default(defaults.birth_date.day().min(max_day))
        .validate_with(|d: &u32| -> Result<(), String> {
            if (1..=max_day).contains(d) {
                Ok(())
            } else {
                Err(format!("Pick a day between 1 and {max_day}"))
            }
        })
        .interact_text()?;

    let labels: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}", c.icon(), c.label()))
        .collect();
    let category_index = Category::ALL
        .iter()
        .position(|c| *c == defaults.category)
        .unwrap_or_default();
    let category = Category::ALL[Select::new()
        .with_prompt("  Category")
        .items(&labels)
        .default(category_index)
        .interact()?];

    let notes: String = Input::new()
        .with_prompt("  Notes (skip)")
        .default(defaults.notes.clone().unwrap_or_default())
        .show_default(defaults.notes.is_some())
        .allow_empty(true)
        .interact_text()?;

    Ok(BirthdayInput::new(name, AnniversaryDate::new(month, day)?, category).with_notes(Some(notes)))
}

