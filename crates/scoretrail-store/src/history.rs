//! Load and save a subject's series through a [`KvStore`]

use crate::error::StoreError;
use crate::kv::KvStore;
use crate::types::{is_valid_score, Series};
use std::collections::HashSet;
use tracing::warn;

/// Series persistence keyed by subject
#[derive(Debug)]
pub struct HistoryStore<S> {
    kv: S,
}

impl<S: KvStore> HistoryStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Load the series stored under `subject_key`
    ///
    /// Absent, unreadable and malformed documents all load as an empty
    /// series; the latter two are logged.
    pub fn load(&self, subject_key: &str) -> Series {
        self.try_load(subject_key).unwrap_or_else(|e| {
            warn!(key = subject_key, error = %e, "history unreadable, starting empty");
            Series::new()
        })
    }

    /// Like [`load`](Self::load), but a medium that cannot be read is an
    /// error rather than an empty series
    ///
    /// Malformed documents still load as empty: they hold nothing worth
    /// keeping, whereas an unreadable one may.
    pub fn try_load(&self, subject_key: &str) -> Result<Series, StoreError> {
        let Some(raw) = self.kv.get(subject_key)? else {
            return Ok(Series::new());
        };

        match decode(&raw) {
            Ok(series) => Ok(series),
            Err(e) => {
                warn!(key = subject_key, error = %e, "discarding malformed history");
                Ok(Series::new())
            }
        }
    }

    /// Persist `series` under `subject_key`
    pub fn save(&self, subject_key: &str, series: &Series) -> Result<(), StoreError> {
        let json = serde_json::to_string(series)?;
        self.kv.set(subject_key, &json)
    }
}

/// Parse a stored document and check it against the series model
pub(crate) fn decode(raw: &str) -> Result<Series, StoreError> {
    let series: Series = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for obs in &series {
        if !is_valid_score(obs.score) {
            return Err(StoreError::Malformed(format!(
                "score {} on {} is outside [0, 100]",
                obs.score, obs.date
            )));
        }
        if !seen.insert(obs.date) {
            return Err(StoreError::Malformed(format!(
                "duplicate observation for {}",
                obs.date
            )));
        }
    }

    let mut observations = series.into_inner();
    // Stable, so valid documents come back unchanged
    observations.sort_by_key(|o| o.timestamp);
    Ok(Series::from(observations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::types::Observation;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    fn sample_series() -> Series {
        Series::from(vec![
            Observation::new(day(1), 60.0, 1_000),
            Observation::new(day(2), 65.25, 2_000),
            Observation::new(day(3), 0.1 + 0.2, 3_000),
        ])
    }

    struct FailingStore;

    impl KvStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }
    }

    #[test]
    fn test_load_absent_is_empty() {
        let history = HistoryStore::new(MemoryStore::new());
        assert!(history.load("history-missing").is_empty());
    }

    #[test]
    fn test_save_load_roundtrip_is_lossless() {
        let history = HistoryStore::new(MemoryStore::new());
        let series = sample_series();

        history.save("history-a", &series).unwrap();
        assert_eq!(history.load("history-a"), series);
    }

    #[test]
    fn test_load_unparseable_is_empty() {
        let kv = MemoryStore::new();
        kv.set("history-a", "{not json").unwrap();
        let history = HistoryStore::new(kv);
        assert!(history.load("history-a").is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let kv = MemoryStore::new();
        kv.set("history-a", r#"{"date":"2026-05-01","score":10}"#)
            .unwrap();
        kv.set("history-b", r#"[{"date":"yesterday","score":10,"timestamp":1}]"#)
            .unwrap();
        let history = HistoryStore::new(kv);
        assert!(history.load("history-a").is_empty());
        assert!(history.load("history-b").is_empty());
    }

    #[test]
    fn test_load_out_of_range_score_is_empty() {
        let kv = MemoryStore::new();
        kv.set(
            "history-a",
            r#"[{"date":"2026-05-01","score":140,"timestamp":1}]"#,
        )
        .unwrap();
        assert!(HistoryStore::new(kv).load("history-a").is_empty());
    }

    #[test]
    fn test_load_duplicate_dates_is_empty() {
        let kv = MemoryStore::new();
        kv.set(
            "history-a",
            r#"[{"date":"2026-05-01","score":10,"timestamp":1},{"date":"2026-05-01","score":20,"timestamp":2}]"#,
        )
        .unwrap();
        assert!(HistoryStore::new(kv).load("history-a").is_empty());
    }

    #[test]
    fn test_load_sorts_unordered_document() {
        let kv = MemoryStore::new();
        kv.set(
            "history-a",
            r#"[{"date":"2026-05-02","score":20,"timestamp":2000},{"date":"2026-05-01","score":10,"timestamp":1000}]"#,
        )
        .unwrap();
        let series = HistoryStore::new(kv).load("history-a");
        assert_eq!(series.scores(), vec![10.0, 20.0]);
    }

    #[test]
    fn test_try_load_separates_unreadable_from_malformed() {
        assert!(matches!(
            HistoryStore::new(FailingStore).try_load("history-a"),
            Err(StoreError::Io(_))
        ));

        let kv = MemoryStore::new();
        kv.set("history-a", "{not json").unwrap();
        assert!(HistoryStore::new(kv).try_load("history-a").unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_store_loads_empty_and_save_errors() {
        let history = HistoryStore::new(FailingStore);
        assert!(history.load("history-a").is_empty());
        assert!(matches!(
            history.save("history-a", &sample_series()),
            Err(StoreError::Io(_))
        ));
    }
}
