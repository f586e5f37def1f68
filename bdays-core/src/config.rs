//! Global bdays configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{BdaysError, BdaysResult};
use crate::overview::DEFAULT_HIGHLIGHT_DAYS;
use crate::stats::DEFAULT_UPCOMING_WINDOW_DAYS;

static DEFAULT_API_URL: &str = "http://localhost:5050/api/v1";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_upcoming_window_days() -> i64 {
    DEFAULT_UPCOMING_WINDOW_DAYS
}

fn default_highlight_days() -> i64 {
    DEFAULT_HIGHLIGHT_DAYS
}

/// Configuration at ~/.config/bdays/config.toml
///
/// Every key can be overridden with a `BDAYS_` environment variable,
/// e.g. `BDAYS_API_URL`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BdaysConfig {
    /// Base URL of the birthday API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Look-ahead used for the "upcoming" dashboard count
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: i64,

    /// Birthdays this many days away or closer are highlighted in lists
    #[serde(default = "default_highlight_days")]
    pub highlight_days: i64,

    /// Category preselected for new birthdays
    #[serde(default)]
    pub default_category: Category,
}

impl Default for BdaysConfig {
    fn default() -> Self {
        BdaysConfig {
            api_url: default_api_url(),
            upcoming_window_days: default_upcoming_window_days(),
            highlight_days: default_highlight_days(),
            default_category: Category::default(),
        }
    }
}

impl BdaysConfig {
    /// Directory holding config.toml and the login session.
    pub fn config_dir() -> BdaysResult<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or_else(|| BdaysError::Config("Could not determine config directory".into()))?
            .join("bdays"))
    }

    pub fn config_path() -> BdaysResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing a commented template on first run.
    pub fn load() -> BdaysResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> BdaysResult<Self> {
        tracing::debug!(path = %path.display(), "loading config");

        let config: BdaysConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("BDAYS").try_parsing(true))
            .build()
            .map_err(|e| BdaysError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BdaysError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> BdaysResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(BdaysError::Config("api_url must not be empty".into()));
        }
        if self.upcoming_window_days < 0 || self.highlight_days < 0 {
            return Err(BdaysError::Config("day windows must not be negative".into()));
        }
        Ok(())
    }

    /// Save the current config, overwriting the file.
    pub fn save(&self, path: &Path) -> BdaysResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| BdaysError::Serialization(e.to_string()))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> BdaysResult<()> {
        let contents = format!(
            "\
# bdays configuration

# Birthday API base URL:
# api_url = \"{DEFAULT_API_URL}\"

# Count birthdays this many days ahead as upcoming:
# upcoming_window_days = {DEFAULT_UPCOMING_WINDOW_DAYS}

# Highlight birthdays this many days away or closer:
# highlight_days = {DEFAULT_HIGHLIGHT_DAYS}

# Category for new birthdays:
# default_category = \"friends\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        BdaysConfig::create_default_config(&path).unwrap();
        let config = BdaysConfig::load_from(&path).unwrap();

        assert_eq!(config, BdaysConfig::default());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"https://bdays.example/api/v1\"\nhighlight_days = 3\ndefault_category = \"childhood_friends\"\n",
        )
        .unwrap();

        let config = BdaysConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url, "https://bdays.example/api/v1");
        assert_eq!(config.highlight_days, 3);
        assert_eq!(config.upcoming_window_days, DEFAULT_UPCOMING_WINDOW_DAYS);
        assert_eq!(config.default_category, Category::ChildhoodFriends);
    }

    #[test]
    fn test_save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = BdaysConfig {
            upcoming_window_days: 14,
            ..Default::default()
        };
        config.save(&path).unwrap();

        assert_eq!(BdaysConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_negative_window_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "highlight_days = -1\n").unwrap();

        assert!(matches!(
            BdaysConfig::load_from(&path),
            Err(BdaysError::Config(_))
        ));
    }

    #[test]
    fn test_write_failures_surface_as_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        assert!(matches!(
            BdaysConfig::default().save(&path),
            Err(BdaysError::Io(_))
        ));
        assert!(matches!(
            BdaysConfig::create_default_config(&path),
            Err(BdaysError::Io(_))
        ));
    }
}
