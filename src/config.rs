use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Settings for the chat front-ends.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Name used in the greeting, if set.
    pub user_name: Option<String>,
    /// Fixed seed for tip selection.
    pub seed: Option<u64>,
    /// Seconds between due-reminder scans.
    pub reminder_interval_secs: u64,
    /// Diagnostic log file for the full-screen interface.
    pub log_file: Option<PathBuf>,
    /// How many entries "show activity log" lists.
    pub recent_log_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_name: None,
            seed: None,
            reminder_interval_secs: 60,
            log_file: None,
            recent_log_len: 10,
        }
    }
}

/// Returns the path to the configuration file.
///
/// The path is determined in the following order:
/// 1. `CYBERBOT_CONFIG` environment variable.
/// 2. `~/.config/cyberbot/config.json` (on Linux).
/// 3. `./config.json` (fallback).
pub fn config_path() -> PathBuf {
    std::env::var("CYBERBOT_CONFIG").map(PathBuf::from).unwrap_or_else(|_| {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("cyberbot");
        p.push("config.json");
        p
    })
}

impl Config {
    /// Defaults, then the config file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(&config_path())?;
        config.apply_env()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when it does not exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "config file loaded");
        Ok(config)
    }

    /// Applies `CYBERBOT_SEED` and `CYBERBOT_REMINDER_SECS` when set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(seed) = std::env::var("CYBERBOT_SEED") {
            self.seed = Some(seed.trim().parse().map_err(|_| {
                ConfigError::InvalidValue("CYBERBOT_SEED".into(), format!("'{}' is not an integer", seed))
            })?);
        }
        if let Ok(secs) = std::env::var("CYBERBOT_REMINDER_SECS") {
            self.reminder_interval_secs = secs.trim().parse().map_err(|_| {
                ConfigError::InvalidValue("CYBERBOT_REMINDER_SECS".into(), format!("'{}' is not an integer", secs))
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.reminder_interval_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "reminder_interval_secs".into(),
                "must be at least 1".into(),
            ));
        }
        if self.recent_log_len == 0 {
            return Err(ConfigError::InvalidValue(
                "recent_log_len".into(),
                "must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
