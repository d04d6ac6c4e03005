//! Damped linear projection of the recent trend

use scoretrail_store::{Observation, Series, MAX_SCORE, MIN_SCORE};
use serde::{Deserialize, Serialize};

/// Fewer observations than this yield no forecast
const MIN_POINTS: usize = 3;

const SHORT_HORIZON_DAYS: f64 = 7.0;
const LONG_HORIZON_DAYS: f64 = 30.0;
// Damping keeps linear extrapolation from running away
const SHORT_HORIZON_DAMPING: f64 = 0.8;
const LONG_HORIZON_DAMPING: f64 = 0.5;

/// Projected scores, rounded and clamped to [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(rename = "horizon7")]
    pub horizon_7: u8,
    #[serde(rename = "horizon30")]
    pub horizon_30: u8,
}

/// Mean of consecutive score differences, `None` below two observations
pub fn average_daily_change(window: &[Observation]) -> Option<f64> {
    if window.len() < 2 {
        return None;
    }
    let total: f64 = window.windows(2).map(|w| w[1].score - w[0].score).sum();
    Some(total / (window.len() - 1) as f64)
}

/// Project `current` forward using the average change over the last
/// `window` observations
pub fn forecast(series: &Series, current: f64, window: usize) -> Option<Forecast> {
    let observations = series.observations();
    if observations.len() < MIN_POINTS {
        return None;
    }

    let recent = &observations[observations.len().saturating_sub(window)..];
    if recent.len() < MIN_POINTS {
        return None;
    }

    let avg_change = average_daily_change(recent)?;

    Some(Forecast {
        horizon_7: project(current, avg_change, SHORT_HORIZON_DAYS, SHORT_HORIZON_DAMPING),
        horizon_30: project(current, avg_change, LONG_HORIZON_DAYS, LONG_HORIZON_DAMPING),
    })
}

fn project(current: f64, avg_change: f64, days: f64, damping: f64) -> u8 {
    (current + avg_change * days * damping)
        .round()
        .clamp(MIN_SCORE, MAX_SCORE) as u8
}
