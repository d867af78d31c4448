//! Configuration management for the buncafe CLI.
//!
//! A small TOML file with two sections: `[cafe]` (display identity and the
//! optional seed-override directory) and `[logging]`. All values have
//! defaults, and everything is validated on load so a bad config fails at
//! startup rather than mid-command.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub cafe: CafeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeConfig {
    /// Name shown at the top of rendered menus
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    /// Directory of JSON seed files overriding the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cafe: CafeConfig {
                name: "Bun & Bean Cafe".to_string(),
                tagline: "Six rabbits, one menu, zero hurry.".to_string(),
                seed_dir: None,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a starter configuration file. Refuses to clobber an existing one.
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            return Err(anyhow!("config file {} already exists", path.display()));
        }
        let config = Config::default();
        let contents =
            toml::to_string_pretty(&config).context("failed to serialize default config")?;
        fs::write(path, contents)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.cafe.name.trim().is_empty() {
            return Err(anyhow!("cafe.name must not be empty"));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(anyhow!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS,
                self.logging.level
            ));
        }
        Ok(())
    }
}
