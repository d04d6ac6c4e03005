//! Observation and series types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Whether a score is finite and inside [`MIN_SCORE`, `MAX_SCORE`]
pub fn is_valid_score(score: f64) -> bool {
    score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// One day's recorded score for a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar day, serialized as YYYY-MM-DD
    pub date: NaiveDate,
    pub score: f64,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl Observation {
    pub fn new(date: NaiveDate, score: f64, timestamp: i64) -> Self {
        Self {
            date,
            score,
            timestamp,
        }
    }

    /// Observation taken at `at`, dated by its UTC calendar day
    pub fn at(score: f64, at: DateTime<Utc>) -> Self {
        Self {
            date: at.date_naive(),
            score,
            timestamp: at.timestamp_millis(),
        }
    }
}

/// Ordered history of observations for one subject, oldest first
///
/// Serializes as a bare JSON array of observations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<Observation>);

impl Series {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn observations(&self) -> &[Observation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.0.iter()
    }

    /// Most recent observation
    pub fn latest(&self) -> Option<&Observation> {
        self.0.last()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.0.iter().map(|o| o.score).collect()
    }

    /// Index of the observation recorded on `date`
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.0.iter().position(|o| o.date == date)
    }

    pub fn into_inner(self) -> Vec<Observation> {
        self.0
    }
}

impl From<Vec<Observation>> for Series {
    fn from(observations: Vec<Observation>) -> Self {
        Self(observations)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
