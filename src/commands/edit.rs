use anyhow::{Context as _, Result};
use bdays_core::{AnniversaryDate, BirthdayInput, Category};
use owo_colors::OwoColorize;

use crate::commands::Context;
use crate::commands::add::prompt_birthday;
use crate::render::Render;

/// Fields to change; anything left `None` keeps its current value.
#[derive(Default)]
pub struct BirthdayChanges {
    pub name: Option<String>,
    pub date: Option<AnniversaryDate>,
    pub category: Option<Category>,
    pub notes: Option<String>,
}

impl BirthdayChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date.is_none() && self.category.is_none() && self.notes.is_none()
    }

    /// Apply on top of an existing record. An empty `notes` clears them.
    pub fn apply(self, mut input: BirthdayInput) -> BirthdayInput {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(date) = self.date {
            input.birth_date = date;
        }
        if let Some(category) = self.category {
            input.category = category;
        }
        match self.notes {
            Some(notes) => input.with_notes(Some(notes)),
            None => input,
        }
    }
}

pub async fn run(ctx: &Context, id: &str, changes: BirthdayChanges) -> Result<()> {
    let client = ctx.client()?;
    let existing = client
        .get_birthday(id)
        .await
        .with_context(|| format!("Failed to load birthday '{id}'"))?;

    let current = BirthdayInput::from(&existing);
    let input = if changes.is_empty() {
        prompt_birthday(&current)?
    } else {
        changes.apply(current)
    };
    input.validate()?;

    let updated = client
        .update_birthday(id, &input)
        .await
        .context("Failed to update birthday")?;

    println!("{} {}", "  Updated:".green(), updated.render());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> BirthdayInput {
        BirthdayInput::new("Ada", AnniversaryDate::new(12, 10).unwrap(), Category::Mentors)
            .with_notes(Some("likes tea".into()))
    }

    #[test]
    fn test_apply_keeps_untouched_fields() {
        let changes = BirthdayChanges {
            date: Some(AnniversaryDate::new(2, 29).unwrap()),
            ..Default::default()
        };
        assert!(!changes.is_empty());

        let updated = changes.apply(existing());
        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.birth_date, AnniversaryDate::new(2, 29).unwrap());
        assert_eq!(updated.category, Category::Mentors);
        assert_eq!(updated.notes.as_deref(), Some("likes tea"));
    }

    #[test]
    fn test_empty_notes_clear_them() {
        let changes = BirthdayChanges {
            notes: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(changes.apply(existing()).notes, None);
    }

    #[test]
    fn test_no_changes() {
        assert!(BirthdayChanges::default().is_empty());
    }
}
