//! Configuration for history retention and forecasting

use scoretrail_store::read_if_exists;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Upper bound on retained observations per subject
pub const MAX_RETENTION_DAYS: usize = 30;
const DEFAULT_RETENTION_DAYS: usize = MAX_RETENTION_DAYS;
const DEFAULT_FORECAST_WINDOW: usize = 7;

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Max observations kept per subject (most recent by timestamp)
    pub retention_days: usize,

    /// Observations considered when averaging the daily change
    pub forecast_window: usize,
}

impl TrackerConfig {
    pub fn new() -> Self {
        Self {
            retention_days: DEFAULT_RETENTION_DAYS,
            forecast_window: DEFAULT_FORECAST_WINDOW,
        }
    }

    /// Load from a JSON file, falling back to defaults when the file is
    /// missing, unreadable or out of range
    pub fn load(path: &Path) -> Self {
        let contents = match read_if_exists(path) {
            Ok(Some(contents)) => contents,
            Ok(None) => return Self::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config unreadable, using defaults");
                return Self::new();
            }
        };

        match serde_json::from_str::<TrackerConfig>(&contents) {
            Ok(config) if config.is_valid() => config,
            Ok(config) => {
                warn!(?config, "config out of range, using defaults");
                Self::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config malformed, using defaults");
                Self::new()
            }
        }
    }

    /// Retention actually applied, never above [`MAX_RETENTION_DAYS`]
    pub fn retention(&self) -> usize {
        self.retention_days.clamp(1, MAX_RETENTION_DAYS)
    }

    // A forecast needs three points in its window
    fn is_valid(&self) -> bool {
        (1..=MAX_RETENTION_DAYS).contains(&self.retention_days) && self.forecast_window >= 3
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}
