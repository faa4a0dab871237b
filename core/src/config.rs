//! Configuration loading
//!
//! Configuration is read from `<config dir>/streakcal/config.toml`
//! (`~/.config/streakcal/config.toml` on Linux). Every field is optional.

use crate::model::calendar::DateRange;
use crate::model::locale::Locale;
use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// Tracked calendar year; the current year when unset
    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub locale: Locale,

    /// Where the day store and log file live; `~/.streakcal` when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path, falling back to defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("streakcal").join("config.toml"))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(".streakcal"))
                .ok_or_else(|| anyhow!("Could not determine home directory")),
        }
    }

    /// The tracked range: the configured year, or the year of `today`.
    pub fn date_range(&self, today: NaiveDate) -> Result<DateRange> {
        let year = self.year.unwrap_or_else(|| today.year());
        DateRange::year(year).ok_or_else(|| anyhow!("Unsupported year: {}", year))
    }
}
