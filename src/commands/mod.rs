pub mod add;
pub mod auth;
pub mod calendar;
pub mod delete;
pub mod edit;
pub mod list;
pub mod next;
pub mod profile;
pub mod stats;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use bdays_core::Birthday;
use bdays_core::config::BdaysConfig;
use chrono::NaiveDate;

use crate::client::Client;
use crate::session::Session;
use crate::utils::tui;

/// Everything a command needs: config, the API client and "today".
pub struct Context {
    pub config: BdaysConfig,
    pub session_path: PathBuf,
    pub session: Option<Session>,
    pub today: NaiveDate,
}

impl Context {
    pub fn load(today: NaiveDate) -> Result<Self> {
        let config = BdaysConfig::load()?;
        let session_path = Session::default_path()?;
        let session = Session::load(&session_path)?;

        Ok(Context {
            config,
            session_path,
            session,
            today,
        })
    }

    /// Client without credentials (register/login).
    pub fn anonymous_client(&self) -> Result<Client> {
        Ok(Client::new(&self.config.api_url, None)?)
    }

    /// Client carrying the stored bearer token.
    pub fn client(&self) -> Result<Client> {
        let Some(session) = &self.session else {
            anyhow::bail!(
                "Not logged in.\n\n\
                Log in with:\n  \
                bdays login\n\n\
                Or create an account:\n  \
                bdays register"
            );
        };
        Ok(Client::new(&self.config.api_url, Some(session.token.clone()))?)
    }

    /// Fetch all birthdays behind a spinner.
    pub async fn fetch_birthdays(&self) -> Result<Vec<Birthday>> {
        let client = self.client()?;
        let spinner = tui::create_spinner("Loading birthdays");
        let result = client.list_birthdays().await;
        spinner.finish_and_clear();
        Ok(result.context("Failed to load birthdays")?)
    }
}
