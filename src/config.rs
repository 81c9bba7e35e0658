//! Configuration management
//!
//! Selects the database location and an optional catalog file override.
//! Stored as TOML under the platform config directory; defaults are
//! written on first run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Entry database settings
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Reference catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Where the entry log lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: default_db_path() }
    }
}

/// Catalog source selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Optional TOML file replacing the built-in crop/soil/technique tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_db_path() -> PathBuf {
    data_dir()
        .map(|d| d.join("entries.db"))
        .unwrap_or_else(|_| PathBuf::from("crop_assistant.db"))
}

impl Config {
    /// Load configuration, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Persist configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let config_path = config_path()?;
        let parent = config_path
            .parent()
            .context("Config path has no parent directory")?;
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;
        Ok(())
    }
}

/// Path to the configuration file.
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "crop-advisor", "crop-advisor")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Platform data directory for the entry database.
pub fn data_dir() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "crop-advisor", "crop-advisor")
        .context("Failed to get project directories")?;
    Ok(base.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.database.path, config.database.path);
        assert!(parsed.catalog.file.is_none());
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.database.path, default_db_path());
    }
}
