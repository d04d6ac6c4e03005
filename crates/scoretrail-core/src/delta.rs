//! Day-over-day change between the two most recent observations

use scoretrail_store::Series;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Changes smaller than this carry no factor labels
const NOTABLE_CHANGE: f64 = 2.0;

const IMPROVEMENT_FACTORS: [Factor; 3] = [Factor::Content, Factor::Structure, Factor::Authority];
const REGRESSION_FACTORS: [Factor; 3] = [Factor::Technical, Factor::AiAccess, Factor::Performance];

/// Direction of the latest change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

/// Presentation label attached to a notable change
///
/// Labels come from a fixed table keyed by the sign of the change; they are
/// not derived from any measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    Content,
    Structure,
    Authority,
    Technical,
    #[serde(rename = "AI Access")]
    AiAccess,
    Performance,
}

impl Factor {
    pub fn label(&self) -> &'static str {
        match self {
            Factor::Content => "Content",
            Factor::Structure => "Structure",
            Factor::Authority => "Authority",
            Factor::Technical => "Technical",
            Factor::AiAccess => "AI Access",
            Factor::Performance => "Performance",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Factor labels for a change
pub fn affected_factors(change: f64) -> &'static [Factor] {
    if change.abs() < NOTABLE_CHANGE {
        &[]
    } else if change > 0.0 {
        &IMPROVEMENT_FACTORS
    } else {
        &REGRESSION_FACTORS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDelta {
    pub change: f64,
    /// Relative to the previous score; 0 when that ratio is not finite
    pub change_percent: f64,
    pub trend: Trend,
    pub affected_factors: Vec<Factor>,
}

/// Compare `current` against the second most recent observation
///
/// Returns `None` for series shorter than two observations.
pub fn daily_delta(series: &Series, current: f64) -> Option<DailyDelta> {
    let observations = series.observations();
    if observations.len() < 2 {
        return None;
    }

    let previous = observations[observations.len() - 2].score;
    let change = current - previous;
    // Zero or subnormal previous scores would give inf/NaN
    let ratio = change / previous * 100.0;
    let change_percent = if ratio.is_finite() { ratio } else { 0.0 };

    Some(DailyDelta {
        change,
        change_percent,
        trend: Trend::from_change(change),
        affected_factors: affected_factors(change).to_vec(),
    })
}
