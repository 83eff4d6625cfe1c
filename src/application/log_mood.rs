//! Log mood use case

use crate::application::{Durability, EntryStore};
use crate::domain::{MoodEntry, Ratings};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Clock, FileSystemRepository, MoodRepository, SystemClock};

/// Result of recording one check-in
#[derive(Debug, Clone)]
pub struct LoggedEntry {
    pub entry: MoodEntry,
    pub durability: Durability,
}

/// Service for recording mood check-ins
pub struct LogMoodService<C = SystemClock> {
    repository: FileSystemRepository,
    clock: C,
}

impl LogMoodService {
    /// Create a new log service using the system clock
    pub fn new(repository: FileSystemRepository) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<C: Clock> LogMoodService<C> {
    pub fn with_clock(repository: FileSystemRepository, clock: C) -> Self {
        LogMoodService { repository, clock }
    }

    /// Append a check-in to the journal
    pub fn execute(&self, ratings: Ratings, notes: &str) -> Result<LoggedEntry> {
        // Fails early outside a journal
        self.repository.load_config()?;

        let mut store =
            EntryStore::initialize(self.repository.entry_persistence(), &self.clock);
        let durability = store.append(ratings, notes);

        let entry = store
            .list()
            .first()
            .cloned()
            .ok_or_else(|| MoodlogError::Persistence("entry was not recorded".to_string()))?;

        Ok(LoggedEntry { entry, durability })
    }
}
