use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    #[error("score {0} is not a finite value in [0, 100]")]
    InvalidScore(f64),

    #[error("timestamp {0}ms does not map to a calendar date")]
    InvalidTimestamp(i64),
}
