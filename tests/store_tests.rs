//! Entry store behaviour against the in-memory and file persistence targets

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use moodlog::application::{Durability, EntryStore};
use moodlog::domain::{weekly_series, Insight, Ratings};
use moodlog::infrastructure::{
    decode_entries, encode_entries, Clock, EntryPersistence, FilePersistence, FixedClock,
    MemoryPersistence,
};
use std::fs;
use tempfile::TempDir;

fn clock() -> FixedClock {
    FixedClock::new(
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    )
}

#[test]
fn test_n_appends_are_listed_newest_first() {
    let mut store = EntryStore::initialize(MemoryPersistence::new(), clock());
    let n = 25;

    for i in 0..n {
        store.append(Ratings::new(5, 5, 5), format!("entry {}", i));
    }

    let entries = store.list();
    assert_eq!(entries.len(), n);
    assert_eq!(entries[0].notes, format!("entry {}", n - 1));
    assert_eq!(entries[n - 1].notes, "entry 0");

    let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), n);
}

#[test]
fn test_round_trip_through_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("entries.json");
    let clock = clock();

    let mut store = EntryStore::initialize(FilePersistence::new(path.clone()), &clock);
    store.append(Ratings::new(2, 3, 9), "tough meeting");
    clock.advance(Duration::minutes(95));
    store.append(Ratings::new(6, 6, 4), "");
    let original = store.list().to_vec();

    let reloaded = EntryStore::initialize(FilePersistence::new(path), &clock);

    assert_eq!(reloaded.list(), original.as_slice());
    assert_eq!(
        reloaded.list()[0].timestamp,
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 35, 0).unwrap()
    );
}

#[test]
fn test_corrupt_or_empty_payload_yields_empty_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("entries.json");

    for payload in ["", "null", "{}", "[1, 2, 3]", "\u{0}\u{1}binary"] {
        fs::write(&path, payload).unwrap();
        let store = EntryStore::initialize(FilePersistence::new(path.clone()), clock());
        assert!(store.is_empty(), "payload {:?} should yield an empty store", payload);
    }
}

#[test]
fn test_unreadable_target_yields_empty_store() {
    let temp = TempDir::new().unwrap();
    // A directory where the file is expected cannot be read as text
    let path = temp.path().join("entries.json");
    fs::create_dir(&path).unwrap();

    let store = EntryStore::initialize(FilePersistence::new(path), clock());
    assert!(store.is_empty());
}

#[test]
fn test_failed_write_is_session_only() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("entries.json");
    fs::create_dir(&path).unwrap();

    let mut store = EntryStore::initialize(FilePersistence::new(path), clock());
    let durability = store.append(Ratings::new(7, 7, 7), "");

    assert_eq!(durability, Durability::SessionOnly);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_store_feeds_aggregation_and_insight() {
    let clock = clock();
    let mut store = EntryStore::initialize(MemoryPersistence::new(), &clock);

    store.append(Ratings::new(8, 5, 5), "");
    store.append(Ratings::new(4, 5, 5), "");
    assert_eq!(Insight::from_recent(store.list()), Insight::KeepLogging);

    store.append(Ratings::new(1, 5, 5), "");
    // newest 1, third newest 8
    assert_eq!(Insight::from_recent(store.list()), Insight::Declining);

    let series = weekly_series(store.list(), clock.today());
    assert_eq!(series[6].mood, 4.3);
    assert_eq!(series[6].entry_count, 3);
}

#[test]
fn test_seeded_memory_payload_loads() {
    let clock = clock();
    let mut first = EntryStore::initialize(MemoryPersistence::new(), &clock);
    first.append(Ratings::new(9, 9, 1), "sunny");
    let payload = encode_entries(first.list()).unwrap();

    let store = EntryStore::initialize(MemoryPersistence::with_payload(payload.clone()), &clock);
    assert_eq!(store.list(), decode_entries(&payload).unwrap().as_slice());
    assert_eq!(store.persistence().load().unwrap(), Some(payload));
}
