//! Aggregate statistics over mood entries
//!
//! Everything here is recomputed from the entry slice on each call. The
//! collections involved are a personal journal's worth of records, so there is
//! no caching layer.

use super::entry::MoodEntry;
use super::insight::Insight;
use super::level::MoodLevel;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Number of days covered by the weekly series, today included
pub const WEEK_LENGTH: i64 = 7;

/// Per-day means for one calendar day of the weekly series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub mood: f64,
    pub energy: f64,
    pub stress: f64,
    /// Entries that fell on this day. Days without entries still report
    /// `0.0` means, so charts show them as zero rather than as gaps.
    pub entry_count: usize,
}

impl DailyAverage {
    /// Short `MM/DD` label for chart axes
    pub fn label(&self) -> String {
        self.date.format("%m/%d").to_string()
    }
}

/// Headline figures for the analytics view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSummary {
    /// Mean mood to one decimal place
    pub average_mood: f64,
    pub average_level: MoodLevel,
    pub total_entries: usize,
    pub best_day: u8,
    pub insight: Insight,
}

impl MoodSummary {
    /// Summarize a newest-first entry collection
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        let total: u32 = entries.iter().map(|e| e.mood.value() as u32).sum();
        MoodSummary {
            average_mood: mean_to_tenth(total, entries.len()),
            average_level: MoodLevel::from_score(overall_average_mood(entries)),
            total_entries: entries.len(),
            best_day: best_day_score(entries),
            insight: Insight::from_recent(entries),
        }
    }
}

/// Mean of `total / count` to one decimal place, exact halves rounding up.
///
/// Works on the integer sum so a mean such as 101 / 20 = 5.05 rounds to 5.1
/// regardless of how the quotient is represented in binary. `0.0` when
/// `count` is zero.
pub fn mean_to_tenth(total: u32, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let count = count as u64;
    let tenths = (20 * total as u64 + count) / (2 * count);
    tenths as f64 / 10.0
}

/// Seven daily points ending at `today`, oldest first
pub fn weekly_series(entries: &[MoodEntry], today: NaiveDate) -> Vec<DailyAverage> {
    (0..WEEK_LENGTH)
        .rev()
        .map(|days_back| daily_average(entries, today - Duration::days(days_back)))
        .collect()
}

/// Means for every entry whose `date` equals `date`, equally weighted
pub fn daily_average(entries: &[MoodEntry], date: NaiveDate) -> DailyAverage {
    let day: Vec<&MoodEntry> = entries.iter().filter(|e| e.date == date).collect();

    if day.is_empty() {
        return DailyAverage {
            date,
            mood: 0.0,
            energy: 0.0,
            stress: 0.0,
            entry_count: 0,
        };
    }

    let mean = |pick: fn(&MoodEntry) -> u8| {
        let total: u32 = day.iter().map(|e| pick(*e) as u32).sum();
        mean_to_tenth(total, day.len())
    };

    DailyAverage {
        date,
        mood: mean(|e| e.mood.value()),
        energy: mean(|e| e.energy.value()),
        stress: mean(|e| e.stress.value()),
        entry_count: day.len(),
    }
}

/// Mean mood over the whole collection, `0.0` when empty
pub fn overall_average_mood(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }

    let total: u32 = entries.iter().map(|e| e.mood.value() as u32).sum();
    total as f64 / entries.len() as f64
}

/// Highest mood rating in the collection, `0` when empty
pub fn best_day_score(entries: &[MoodEntry]) -> u8 {
    entries.iter().map(|e| e.mood.value()).max().unwrap_or(0)
}
