//! Runs of non-decreasing scores

use scoretrail_store::Series;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Improvement,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Steps in the run ending at the latest observation
    pub current: usize,
    /// Longest run anywhere in the series
    pub best: usize,
    pub kind: StreakKind,
}

impl Streak {
    pub fn none() -> Self {
        Self {
            current: 0,
            best: 0,
            kind: StreakKind::None,
        }
    }
}

impl Default for Streak {
    fn default() -> Self {
        Self::none()
    }
}

/// Count consecutive non-decreasing steps
///
/// Equal scores extend a run; any decrease resets it to zero.
pub fn streak(series: &Series) -> Streak {
    let scores = series.scores();
    if scores.len() < 2 {
        return Streak::none();
    }

    let mut run = 0;
    let mut best = 0;
    for pair in scores.windows(2) {
        if pair[1] >= pair[0] {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }

    Streak {
        current: run,
        best,
        kind: if run > 0 {
            StreakKind::Improvement
        } else {
            StreakKind::None
        },
    }
}
