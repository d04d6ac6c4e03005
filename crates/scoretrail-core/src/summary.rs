//! Aggregate statistics over a stored series

use chrono::NaiveDate;
use scoretrail_store::Series;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub count: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    /// Latest score minus earliest score
    pub net_change: f64,
}

pub fn summarize(series: &Series) -> Option<HistorySummary> {
    let first = series.observations().first()?;
    let last = series.latest()?;

    let scores = series.scores();
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let average = scores.iter().sum::<f64>() / scores.len() as f64;

    Some(HistorySummary {
        count: scores.len(),
        first_date: first.date,
        last_date: last.date,
        min,
        max,
        average,
        net_change: last.score - first.score,
    })
}
