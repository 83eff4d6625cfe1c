//! Recent-trend insight

use super::entry::MoodEntry;
use serde::Serialize;
use std::fmt;

/// Entries needed before a trend is reported
pub const MIN_ENTRIES_FOR_TREND: usize = 3;

/// Mood change (newest minus third newest) above which the trend is improving.
/// The negated value is the declining threshold.
pub const TREND_THRESHOLD: i32 = 1;

/// One-sentence observation about the latest entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    KeepLogging,
    Improving,
    Declining,
    Stable,
}

impl Insight {
    /// Derive the insight from a newest-first collection.
    ///
    /// Compares the newest entry against the third newest; the entry in
    /// between does not participate.
    pub fn from_recent(entries: &[MoodEntry]) -> Self {
        if entries.len() < MIN_ENTRIES_FOR_TREND {
            return Insight::KeepLogging;
        }

        let trend = entries[0].mood.value() as i32 - entries[2].mood.value() as i32;

        if trend > TREND_THRESHOLD {
            Insight::Improving
        } else if trend < -TREND_THRESHOLD {
            Insight::Declining
        } else {
            Insight::Stable
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Insight::KeepLogging => "Keep logging your mood to get personalized insights!",
            Insight::Improving => {
                "Your mood has been improving recently! Keep up the positive momentum."
            }
            Insight::Declining => {
                "Your mood seems to be declining. Consider reaching out for support or trying some self-care activities."
            }
            Insight::Stable => {
                "Your mood has been relatively stable. That's a good sign of emotional balance!"
            }
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
