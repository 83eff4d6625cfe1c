//! Persistence targets for the serialized entry collection

use crate::domain::MoodEntry;
use crate::error::{MoodlogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the whole serialized collection as one payload
pub trait EntryPersistence {
    /// Previously stored payload, or `None` when nothing was saved yet
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored payload wholesale
    fn save(&mut self, payload: &str) -> Result<()>;
}

/// Serialize a newest-first collection
pub fn encode_entries(entries: &[MoodEntry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}

/// Parse a payload produced by [`encode_entries`]
pub fn decode_entries(payload: &str) -> Result<Vec<MoodEntry>> {
    Ok(serde_json::from_str(payload)?)
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    pub fn new(path: PathBuf) -> Self {
        FilePersistence { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the payload is written to before it replaces `path`
    fn temp_path(&self) -> PathBuf {
        let tmp_name = format!(
            "{}.moodlog-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries.json"),
            std::process::id()
        );
        self.path.with_file_name(tmp_name)
    }
}

impl EntryPersistence for FilePersistence {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MoodlogError::Io(e)),
        }
    }

    fn save(&mut self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.temp_path();

        if let Err(e) = fs::write(&tmp_path, payload) {
            let _ = fs::remove_file(&tmp_path);
            return Err(MoodlogError::Io(e));
        }
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            MoodlogError::Persistence(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// In-memory payload slot
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    payload: Option<String>,
    fail_writes: bool,
    saves: usize,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing payload, valid or not
    pub fn with_payload(payload: impl Into<String>) -> Self {
        MemoryPersistence {
            payload: Some(payload.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl EntryPersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.payload.clone())
    }

    fn save(&mut self, payload: &str) -> Result<()> {
        if self.fail_writes {
            return Err(MoodlogError::Persistence(
                "write rejected by storage".to_string(),
            ));
        }

        self.payload = Some(payload.to_string());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ratings;
    use chrono::{NaiveDate, TimeZone, Utc};
    use tempfile::TempDir;

    fn sample_entries() -> Vec<MoodEntry> {
        vec![
            MoodEntry::new(
                Ratings::new(8, 7, 2),
                "good run".to_string(),
                NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
                Utc.with_ymd_and_hms(2025, 1, 17, 7, 15, 0).unwrap(),
            ),
            MoodEntry::new(
                Ratings::new(3, 2, 9),
                String::new(),
                NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(),
                Utc.with_ymd_and_hms(2025, 1, 16, 22, 40, 12).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_encode_decode_preserves_all_fields() {
        let entries = sample_entries();
        let payload = encode_entries(&entries).unwrap();
        let decoded = decode_entries(&payload).unwrap();

        assert_eq!(decoded, entries);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_entries("{not json").is_err());
        assert!(decode_entries("").is_err());
        assert!(decode_entries(r#"{"id": "1"}"#).is_err());
    }

    #[test]
    fn test_file_load_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let persistence = FilePersistence::new(temp.path().join("entries.json"));

        assert_eq!(persistence.load().unwrap(), None);
    }

    #[test]
    fn test_file_save_then_load() {
        let temp = TempDir::new().unwrap();
        let mut persistence = FilePersistence::new(temp.path().join(".moodlog/entries.json"));

        persistence.save("[]").unwrap();
        assert_eq!(persistence.load().unwrap().as_deref(), Some("[]"));

        persistence.save("[1]").unwrap();
        assert_eq!(persistence.load().unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_save_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let mut persistence = FilePersistence::new(temp.path().join("entries.json"));

        persistence.save("[]").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["entries.json".to_string()]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_file_save_cleans_up_after_failed_write() {
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }

        let temp = TempDir::new().unwrap();
        let mut persistence = FilePersistence::new(temp.path().join("entries.json"));
        persistence.save("[]").unwrap();

        // Every write to /dev/full fails with "no space left on device"
        std::os::unix::fs::symlink(full, persistence.temp_path()).unwrap();

        match persistence.save("[1]").unwrap_err() {
            MoodlogError::Io(_) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["entries.json".to_string()]);
        assert_eq!(persistence.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_failing_writes() {
        let mut persistence = MemoryPersistence::with_payload("[]").failing_writes();

        assert!(persistence.save("[1]").is_err());
        assert_eq!(persistence.payload(), Some("[]"));
        assert_eq!(persistence.saves(), 0);
    }
}
