//! Mood analytics use case

use crate::application::EntryStore;
use crate::domain::{weekly_series, DailyAverage, Insight, MoodEntry, MoodSummary};
use crate::error::Result;
use crate::infrastructure::{Clock, FilePersistence, FileSystemRepository, MoodRepository, SystemClock};

/// How many entries `recent` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentLimit {
    /// Use `recent_limit` from the journal config
    Configured,
    Count(usize),
    All,
}

/// Read-only queries over the journal's entries
pub struct AnalyticsService<C = SystemClock> {
    repository: FileSystemRepository,
    clock: C,
}

impl AnalyticsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<C: Clock> AnalyticsService<C> {
    pub fn with_clock(repository: FileSystemRepository, clock: C) -> Self {
        AnalyticsService { repository, clock }
    }

    fn open_store(&self) -> Result<EntryStore<FilePersistence, &C>> {
        self.repository.load_config()?;
        Ok(EntryStore::initialize(
            self.repository.entry_persistence(),
            &self.clock,
        ))
    }

    /// Average, level, totals and insight
    pub fn summary(&self) -> Result<MoodSummary> {
        let store = self.open_store()?;
        Ok(MoodSummary::from_entries(store.list()))
    }

    /// Seven days ending today, oldest first
    pub fn weekly(&self) -> Result<Vec<DailyAverage>> {
        let store = self.open_store()?;
        Ok(weekly_series(store.list(), self.clock.today()))
    }

    pub fn insight(&self) -> Result<Insight> {
        let store = self.open_store()?;
        Ok(Insight::from_recent(store.list()))
    }

    /// Newest entries first
    pub fn recent(&self, limit: RecentLimit) -> Result<Vec<MoodEntry>> {
        let count = match limit {
            RecentLimit::Configured => Some(self.repository.load_config()?.recent_limit),
            RecentLimit::Count(n) => Some(n),
            RecentLimit::All => None,
        };

        let store = self.open_store()?;
        let entries = match count {
            Some(n) => store.recent(n),
            None => store.list(),
        };
        Ok(entries.to_vec())
    }
}
