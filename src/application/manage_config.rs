//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, MoodRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "recent_limit" => Ok(config.recent_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: recent_limit, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "recent_limit" => config.set_recent_limit(value)?,
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: recent_limit",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    #[test]
    fn test_get_and_set_recent_limit() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(init(temp.path()).unwrap());

        assert_eq!(service.get("recent_limit").unwrap(), "10");
        service.set("recent_limit", "3").unwrap();
        assert_eq!(service.get("recent_limit").unwrap(), "3");
        assert_eq!(service.list().unwrap().recent_limit, 3);
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(init(temp.path()).unwrap());

        assert!(!service.get("created").unwrap().is_empty());
        match service.set("created", "2020-01-01T00:00:00Z").unwrap_err() {
            MoodlogError::Config(msg) => assert!(msg.contains("read-only")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(init(temp.path()).unwrap());

        assert!(service.get("theme").is_err());
        assert!(service.set("theme", "dark").is_err());
    }

    #[test]
    fn test_invalid_value_not_saved() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(init(temp.path()).unwrap());

        assert!(service.set("recent_limit", "zero").is_err());
        assert_eq!(service.get("recent_limit").unwrap(), "10");
    }
}
