use anyhow::{Context as _, Result};
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::client::ApiError;
use crate::commands::Context;
use crate::session::Session;

pub async fn register(
    ctx: &Context,
    name: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new().with_prompt("  Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => prompt_email()?,
    };

    let password = rpassword::prompt_password("  Password: ")?;
    let confirm = rpassword::prompt_password("  Confirm password: ")?;
    if password != confirm {
        anyhow::bail!("Passwords do not match");
    }

    let client = ctx.anonymous_client()?;
    client.register(&name, &email, &password).await.map_err(|e| match e {
        ApiError::Conflict(_) => {
            anyhow::anyhow!("Email already exists. Please use a different email.")
        }
        ApiError::Status { status: 400, .. } => {
            anyhow::anyhow!("Invalid registration data. Please check your inputs.")
        }
        other => anyhow::Error::new(other).context("Registration failed"),
    })?;

    // A fresh account is logged in straight away
    let token = client.login(&email, &password).await?;
    Session::new(&email, token).save(&ctx.session_path)?;

    println!("{}", format!("  Welcome, {}!", name).green());
    Ok(())
}

pub async fn login(ctx: &Context, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => prompt_email()?,
    };
    let password = rpassword::prompt_password("  Password: ")?;

    let token = ctx
        .anonymous_client()?
        .login(&email, &password)
        .await
        .context("Login failed")?;

    Session::new(&email, token).save(&ctx.session_path)?;

    println!("{}", format!("  Logged in as {}", email).green());
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    // The API has no logout endpoint; forgetting the token is enough
    if Session::clear(&ctx.session_path)? {
        println!("{}", "  Logged out".green());
    } else {
        println!("{}", "  Not logged in".dimmed());
    }
    Ok(())
}

fn prompt_email() -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("  Email")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.contains('@') {
                Ok(())
            } else {
                Err("Not an email address")
            }
        })
        .interact_text()?)
}
