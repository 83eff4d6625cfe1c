//! Application layer - Use cases and orchestration

pub mod analytics;
pub mod init;
pub mod log_mood;
pub mod manage_config;
pub mod store;

pub use analytics::{AnalyticsService, RecentLimit};
pub use log_mood::{LogMoodService, LoggedEntry};
pub use manage_config::ConfigService;
pub use store::{Durability, EntryStore};
