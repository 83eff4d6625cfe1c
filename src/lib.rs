//! moodlog - Terminal mood journal
//!
//! Records mood, energy and stress check-ins, keeps them in a local JSON file,
//! and derives weekly averages, headline statistics and a short trend insight.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
