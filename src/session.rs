//! The logged-in session (bearer token) stored between runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bdays_core::config::BdaysConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub token: String,
}

impl Session {
    pub fn new(email: &str, token: String) -> Self {
        Session {
            email: email.to_string(),
            token,
        }
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(BdaysConfig::config_dir()?.join("session.toml"))
    }

    /// Load the saved session, if there is one.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read session file {}", path.display()))?;
        let session: Session = toml::from_str(&content)
            .with_context(|| format!("Corrupt session file {}", path.display()))?;

        tracing::debug!(email = %session.email, "loaded session");
        Ok(Some(session))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Could not write session file {}", path.display()))?;
        Ok(())
    }

    /// Forget the stored token. Returns true if a session existed.
    pub fn clear(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)
            .with_context(|| format!("Could not remove session file {}", path.display()))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bdays").join("session.toml");

        assert_eq!(Session::load(&path).unwrap(), None);

        let session = Session::new("ada@example.com", "tok-123".into());
        session.save(&path).unwrap();
        assert_eq!(Session::load(&path).unwrap(), Some(session));

        assert!(Session::clear(&path).unwrap());
        assert!(!Session::clear(&path).unwrap());
        assert_eq!(Session::load(&path).unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(Session::load(&path).is_err());
    }
}
