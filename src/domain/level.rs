//! Mood level labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse label for a mood value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLevel {
    Great,
    Good,
    Okay,
    Struggling,
}

impl MoodLevel {
    /// Classify a mood value (a single rating or an average)
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            MoodLevel::Great
        } else if score >= 6.0 {
            MoodLevel::Good
        } else if score >= 4.0 {
            MoodLevel::Okay
        } else {
            MoodLevel::Struggling
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodLevel::Great => "Great",
            MoodLevel::Good => "Good",
            MoodLevel::Okay => "Okay",
            MoodLevel::Struggling => "Struggling",
        }
    }

    /// Short glyph used in list output
    pub fn glyph(&self) -> &'static str {
        match self {
            MoodLevel::Great => ":)",
            MoodLevel::Good => ":|",
            MoodLevel::Okay | MoodLevel::Struggling => ":(",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
