//! Output formatting utilities

use crate::domain::{DailyAverage, MoodEntry, MoodLevel, MoodSummary};
use chrono::Local;

/// Format a list of mood entries for display
pub fn format_entry_list(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No entries yet. Start tracking your mood!".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let level = MoodLevel::from_score(entry.mood.value() as f64);
        output.push_str(&format!(
            "{}  {}  {}  mood {}/10  energy {}/10  stress {}/10\n",
            entry.date.format("%d-%m-%Y"),
            entry.timestamp.with_timezone(&Local).format("%H:%M"),
            level.glyph(),
            entry.mood,
            entry.energy,
            entry.stress,
        ));
        if entry.has_notes() {
            output.push_str(&format!("    {}\n", entry.notes.trim()));
        }
    }
    output
}

/// Format the summary cards and insight
pub fn format_summary(summary: &MoodSummary) -> String {
    format!(
        "Average mood:  {:.1} ({})\n\
         Total entries: {}\n\
         Best day:      {}\n\n\
         Insight: {}\n",
        summary.average_mood,
        summary.average_level,
        summary.total_entries,
        summary.best_day,
        summary.insight,
    )
}

/// Format the seven-day series as a table
pub fn format_weekly(series: &[DailyAverage]) -> String {
    let mut output = String::from("Day    Mood  Energy  Stress\n");
    for day in series {
        output.push_str(&format!(
            "{}  {:>5.1}  {:>6.1}  {:>6.1}\n",
            day.label(),
            day.mood,
            day.energy,
            day.stress
        ));
    }
    output
}
