//! Daily upsert and retention of observations

use scoretrail_store::{Observation, Series};

/// Upsert `observation` into `existing` and keep the `retention` most recent
///
/// An observation already recorded for the same calendar day is replaced in
/// place, so re-observing within a day never duplicates. The result is the
/// `retention` newest observations by timestamp, oldest first.
pub fn merge_observation(existing: Series, observation: Observation, retention: usize) -> Series {
    let mut observations = existing.into_inner();

    match observations.iter_mut().find(|o| o.date == observation.date) {
        Some(slot) => *slot = observation,
        None => observations.push(observation),
    }

    // Newest first, cut, then back to ascending. Stable on timestamp ties.
    observations.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    observations.truncate(retention);
    observations.reverse();

    Series::from(observations)
}
