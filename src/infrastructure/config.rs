//! Configuration management

use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Entries shown by `list` when no limit is given
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    pub created: DateTime<Utc>,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            recent_limit: DEFAULT_RECENT_LIMIT,
            created: Utc::now(),
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(".moodlog");
        let config_path = moodlog_dir.join("config.toml");

        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Parse and apply a `recent_limit` value
    pub fn set_recent_limit(&mut self, value: &str) -> Result<()> {
        let limit: usize = value.trim().parse().map_err(|_| {
            MoodlogError::Config(format!(
                "Invalid recent_limit: '{}'. Expected a positive whole number",
                value
            ))
        })?;

        if limit == 0 {
            return Err(MoodlogError::Config(
                "Invalid recent_limit: 0. Expected a positive whole number".to_string(),
            ));
        }

        self.recent_limit = limit;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
