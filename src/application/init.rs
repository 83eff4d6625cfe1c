//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, MoodRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new mood journal at the specified path.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    info!(root = %path.display(), "initialized mood journal");
    Ok(repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config() {
        let temp = TempDir::new().unwrap();

        let repo = init(temp.path()).unwrap();

        assert!(repo.is_initialized());
        assert_eq!(repo.load_config().unwrap().recent_limit, 10);
        // No entries are written until the first check-in
        assert!(!repo.entries_path().exists());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("journals").join("mood");

        init(&target).unwrap();

        assert!(target.join(".moodlog/config.toml").is_file());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
