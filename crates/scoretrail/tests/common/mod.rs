use chrono::{DateTime, Duration, TimeZone, Utc};
use scoretrail_core::{Tracker, TrackerConfig, TrackerReport};
use scoretrail_store::{KvStore, MemoryStore};

pub const URL: &str = "https://example.com/products";

/// Noon UTC, `offset` days after 2026-01-01
pub fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap() + Duration::days(offset)
}

pub fn memory_tracker() -> Tracker<MemoryStore> {
    Tracker::new(MemoryStore::new(), TrackerConfig::default())
}

/// Record one score per consecutive day, returning the last report
pub fn record_daily<S: KvStore>(tracker: &Tracker<S>, scores: &[f64]) -> TrackerReport {
    let mut last = None;
    for (i, &score) in scores.iter().enumerate() {
        last = Some(tracker.record_at(URL, score, day(i as i64)).unwrap());
    }
    last.expect("at least one score")
}
