//! One observation cycle: validate, merge, persist, analyse

use crate::config::TrackerConfig;
use crate::delta::{daily_delta, DailyDelta};
use crate::error::TrackerError;
use crate::forecast::{forecast, Forecast};
use crate::merge::merge_observation;
use crate::streak::{streak, Streak};
use chrono::{DateTime, Utc};
use scoretrail_store::{is_valid_score, subject_key, HistoryStore, KvStore, Observation, Series};
use serde::Serialize;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Everything the presentation layer needs after a cycle
///
/// Derived fields are recomputed from `series` every time and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerReport {
    pub subject_key: String,
    /// Score the analytics were computed against; `None` with no history
    pub current_score: Option<f64>,
    pub series: Series,
    pub delta: Option<DailyDelta>,
    pub streak: Streak,
    pub forecast: Option<Forecast>,
    /// False when the updated series could not be written back
    pub persisted: bool,
}

impl TrackerReport {
    /// Run the calculators over `series`
    pub fn analyze(
        subject_key: String,
        series: Series,
        current_score: Option<f64>,
        config: &TrackerConfig,
        persisted: bool,
    ) -> Self {
        let (delta, forecast) = match current_score {
            Some(current) => (
                daily_delta(&series, current),
                forecast(&series, current, config.forecast_window),
            ),
            None => (None, None),
        };

        Self {
            subject_key,
            current_score,
            streak: streak(&series),
            series,
            delta,
            forecast,
            persisted,
        }
    }
}

/// Score history tracker over a key-value medium
#[derive(Debug)]
pub struct Tracker<S> {
    history: HistoryStore<S>,
    config: TrackerConfig,
    // Serializes read-modify-write cycles issued through this tracker
    update_lock: Mutex<()>,
}

impl<S: KvStore> Tracker<S> {
    pub fn new(store: S, config: TrackerConfig) -> Self {
        Self {
            history: HistoryStore::new(store),
            config,
            update_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// Record `score` for `url` now
    pub fn record(&self, url: &str, score: f64) -> Result<TrackerReport, TrackerError> {
        self.record_at(url, score, Utc::now())
    }

    /// Record `score` for `url` at a millisecond Unix timestamp
    pub fn record_at_millis(
        &self,
        url: &str,
        score: f64,
        timestamp_ms: i64,
    ) -> Result<TrackerReport, TrackerError> {
        let at = DateTime::from_timestamp_millis(timestamp_ms)
            .ok_or(TrackerError::InvalidTimestamp(timestamp_ms))?;
        self.record_at(url, score, at)
    }

    /// Record `score` for `url` as observed at `at`
    ///
    /// A failed save is logged and reported through
    /// [`TrackerReport::persisted`]; the analytics are still returned. When
    /// the stored history cannot be read, the save is skipped so it is not
    /// replaced by a single observation.
    pub fn record_at(
        &self,
        url: &str,
        score: f64,
        at: DateTime<Utc>,
    ) -> Result<TrackerReport, TrackerError> {
        if !is_valid_score(score) {
            return Err(TrackerError::InvalidScore(score));
        }

        let key = subject_key(url);
        let (series, persisted) = {
            let _guard = self.update_lock.lock().unwrap_or_else(|e| e.into_inner());

            // Saving over a history we could not read would erase it
            let (existing, readable) = match self.history.try_load(&key) {
                Ok(series) => (series, true),
                Err(e) => {
                    warn!(key = %key, error = %e, "history unreadable, not overwriting it");
                    (Series::new(), false)
                }
            };
            let series = merge_observation(
                existing,
                Observation::at(score, at),
                self.config.retention(),
            );

            let persisted = readable
                && match self.history.save(&key, &series) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(key = %key, error = %e, "failed to persist history");
                        false
                    }
                };
            (series, persisted)
        };

        debug!(
            key = %key,
            score,
            observations = series.len(),
            persisted,
            "recorded observation"
        );

        Ok(TrackerReport::analyze(
            key,
            series,
            Some(score),
            &self.config,
            persisted,
        ))
    }

    /// Analyse the stored history without recording anything
    ///
    /// The latest stored score stands in for the current score.
    pub fn report(&self, url: &str) -> TrackerReport {
        let key = subject_key(url);
        let series = self.history.load(&key);
        let current = series.latest().map(|o| o.score);
        TrackerReport::analyze(key, series, current, &self.config, true)
    }
}
