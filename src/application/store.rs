//! Entry store: the authoritative, newest-first entry collection

use crate::domain::{MoodEntry, Ratings};
use crate::error::Result;
use crate::infrastructure::{decode_entries, encode_entries, Clock, EntryPersistence};
use tracing::{debug, warn};

/// Whether the latest append reached the persistence target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    Persisted,
    /// The entry is kept in memory for this session but the write failed
    SessionOnly,
}

/// Owns the in-memory entry collection and mirrors it to a persistence target.
///
/// The persistence target is a serialization sink, not a second source of
/// truth: every append rewrites it with the full collection.
pub struct EntryStore<P, C> {
    persistence: P,
    clock: C,
    entries: Vec<MoodEntry>,
}

impl<P: EntryPersistence, C: Clock> EntryStore<P, C> {
    /// Load a previously saved collection.
    ///
    /// A missing, unreadable or unparseable payload yields an empty store.
    pub fn initialize(persistence: P, clock: C) -> Self {
        let entries = match persistence.load() {
            Ok(Some(payload)) => match decode_entries(&payload) {
                Ok(entries) => {
                    debug!(count = entries.len(), "loaded mood entries");
                    entries
                }
                Err(e) => {
                    warn!(error = %e, "stored mood entries are unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("no stored mood entries");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "failed to load mood entries, starting empty");
                Vec::new()
            }
        };

        EntryStore {
            persistence,
            clock,
            entries,
        }
    }

    /// Record a new check-in at the front of the collection and persist
    /// the whole collection.
    pub fn append(&mut self, ratings: Ratings, notes: impl Into<String>) -> Durability {
        let entry = MoodEntry::new(
            ratings,
            notes.into(),
            self.clock.today(),
            self.clock.now(),
        );
        debug!(id = %entry.id, date = %entry.date, "appending mood entry");
        self.entries.insert(0, entry);

        match self.persist() {
            Ok(()) => Durability::Persisted,
            Err(e) => {
                warn!(error = %e, "failed to save mood entries, keeping them for this session");
                Durability::SessionOnly
            }
        }
    }

    fn persist(&mut self) -> Result<()> {
        let payload = encode_entries(&self.entries)?;
        self.persistence.save(&payload)
    }

    /// All entries, newest first
    pub fn list(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// At most `limit` newest entries
    pub fn recent(&self, limit: usize) -> &[MoodEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn into_persistence(self) -> P {
        self.persistence
    }
}
