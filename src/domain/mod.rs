//! Domain layer - Mood entries and the statistics derived from them

pub mod analytics;
pub mod entry;
pub mod insight;
pub mod level;
pub mod rating;

pub use analytics::{
    best_day_score, overall_average_mood, weekly_series, DailyAverage, MoodSummary,
};
pub use entry::{EntryId, MoodEntry};
pub use insight::Insight;
pub use level::MoodLevel;
pub use rating::{Rating, Ratings};
