//! Infrastructure layer - External I/O and persistence

pub mod clock;
pub mod config;
pub mod persistence;
pub mod repository;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use persistence::{
    decode_entries, encode_entries, EntryPersistence, FilePersistence, MemoryPersistence,
};
pub use repository::{FileSystemRepository, MoodRepository};
