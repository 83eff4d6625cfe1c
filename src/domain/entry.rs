//! Mood entry model

use super::rating::{Rating, Ratings};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, stable identifier of a mood entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One self-report. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: EntryId,
    /// Local calendar day the entry belongs to; the grouping key for daily stats
    pub date: NaiveDate,
    pub mood: Rating,
    pub energy: Rating,
    pub stress: Rating,
    #[serde(default)]
    pub notes: String,
    /// Creation instant, used for display only
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    /// Create a new entry with a fresh id
    pub fn new(ratings: Ratings, notes: String, date: NaiveDate, timestamp: DateTime<Utc>) -> Self {
        MoodEntry {
            id: EntryId::generate(),
            date,
            mood: ratings.mood,
            energy: ratings.energy,
            stress: ratings.stress,
            notes,
            timestamp,
        }
    }

    pub fn ratings(&self) -> Ratings {
        Ratings {
            mood: self.mood,
            energy: self.energy,
            stress: self.stress,
        }
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}
