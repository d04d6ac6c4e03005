//! Score history maintenance and trend analytics

mod config;
mod delta;
mod error;
mod forecast;
mod merge;
mod streak;
mod summary;
mod tracker;

pub use config::{TrackerConfig, MAX_RETENTION_DAYS};
pub use delta::{affected_factors, daily_delta, DailyDelta, Factor, Trend};
pub use error::TrackerError;
pub use forecast::{average_daily_change, forecast, Forecast};
pub use merge::merge_observation;
pub use streak::{streak, Streak, StreakKind};
pub use summary::{summarize, HistorySummary};
pub use tracker::{Tracker, TrackerReport};
