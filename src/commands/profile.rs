use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::client::ProfileUpdate;
use crate::commands::Context;
use crate::session::Session;

pub async fn run(
    ctx: &Context,
    name: Option<String>,
    email: Option<String>,
    change_password: bool,
) -> Result<()> {
    let client = ctx.client()?;
    let user = client.profile().await.context("Failed to load profile")?;

    if name.is_none() && email.is_none() && !change_password {
        println!("{:<8}{}", "Name".dimmed(), user.name.bold());
        println!("{:<8}{}", "Email".dimmed(), user.email);
        return Ok(());
    }

    let mut update = ProfileUpdate {
        name: name.unwrap_or(user.name),
        email: email.unwrap_or(user.email),
        ..Default::default()
    };

    if change_password {
        let current = rpassword::prompt_password("  Current password: ")?;
        let new = rpassword::prompt_password("  New password: ")?;
        let confirm = rpassword::prompt_password("  Confirm new password: ")?;
        if new != confirm {
            anyhow::bail!("New passwords do not match");
        }
        validate_new_password(&new)?;
        update.current_password = Some(current);
        update.password = Some(new);
    }

    let updated = client
        .update_profile(&update)
        .await
        .context("Failed to update profile")?;

    // Keep the stored session's email in sync
    if let Some(session) = &ctx.session {
        if session.email != updated.email {
            Session::new(&updated.email, session.token.clone()).save(&ctx.session_path)?;
        }
    }

    println!("{}", "  Profile updated".green());
    Ok(())
}

const MIN_PASSWORD_LEN: usize = 6;

fn validate_new_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        anyhow::bail!("Password must be at least {MIN_PASSWORD_LEN} characters");
    }
    Ok(())
}

pub async fn delete_account(ctx: &Context, force: bool) -> Result<()> {
    let client = ctx.client()?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Delete your account and all birthdays? This cannot be undone")
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    client
        .delete_account()
        .await
        .context("Failed to delete account")?;
    Session::clear(&ctx.session_path)?;

    println!("{}", "  Account deleted".green());
    Ok(())
}
