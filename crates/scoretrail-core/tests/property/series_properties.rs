use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use scoretrail_core::{daily_delta, forecast, merge_observation, streak, Trend};
use scoretrail_store::{Observation, Series};
use std::collections::HashSet;

const DAY_MS: i64 = 86_400_000;

fn observation(day: u64, score: f64) -> Observation {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    Observation::new(start + Days::new(day), score, day as i64 * DAY_MS)
}

fn series_from(scores: &[f64]) -> Series {
    Series::from(
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| observation(i as u64, s))
            .collect::<Vec<_>>(),
    )
}

/// Observation days in any order; scores in range
fn arb_days() -> impl Strategy<Value = Vec<(u64, f64)>> {
    prop::collection::vec((0u64..90, 0.0f64..=100.0), 0..80)
}

proptest! {
    #[test]
    fn merge_keeps_series_invariants(days in arb_days()) {
        let mut series = Series::new();
        for (day, score) in days {
            series = merge_observation(series, observation(day, score), 30);

            prop_assert!(series.len() <= 30);

            let dates: HashSet<_> = series.iter().map(|o| o.date).collect();
            prop_assert_eq!(dates.len(), series.len());

            let stamps: Vec<i64> = series.iter().map(|o| o.timestamp).collect();
            prop_assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn same_day_merge_keeps_second_score(
        prior in prop::collection::vec(0.0f64..=100.0, 0..10),
        first in 0.0f64..=100.0,
        second in 0.0f64..=100.0,
    ) {
        let today = prior.len() as u64;
        let series = series_from(&prior);
        let series = merge_observation(series, observation(today, first), 30);
        let series = merge_observation(series, observation(today, second), 30);

        let todays: Vec<_> = series
            .iter()
            .filter(|o| o.date == observation(today, 0.0).date)
            .collect();
        prop_assert_eq!(todays.len(), 1);
        prop_assert_eq!(todays[0].score, second);
        prop_assert_eq!(series.len(), prior.len() + 1);
    }

    #[test]
    fn strictly_increasing_streak_spans_series(start in 0.0f64..50.0, n in 2usize..40) {
        let step = 50.0 / n as f64;
        let scores: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();

        let s = streak(&series_from(&scores));
        prop_assert_eq!(s.current, n - 1);
        prop_assert_eq!(s.best, n - 1);
    }

    #[test]
    fn single_decrease_resets_current(
        head in 2usize..15,
        tail in 0usize..15,
    ) {
        let mut scores: Vec<f64> = (0..head).map(|i| 40.0 + i as f64).collect();
        scores.push(0.0);
        scores.extend((0..tail).map(|i| 1.0 + i as f64));

        let s = streak(&series_from(&scores));
        prop_assert_eq!(s.current, tail);
        prop_assert_eq!(s.best, (head - 1).max(tail));
    }

    #[test]
    fn forecast_is_bounded(
        scores in prop::collection::vec(0.0f64..=100.0, 3..30),
        window in 3usize..10,
    ) {
        let current = *scores.last().unwrap();
        let f = forecast(&series_from(&scores), current, window).unwrap();
        prop_assert!(f.horizon_7 <= 100);
        prop_assert!(f.horizon_30 <= 100);
    }

    #[test]
    fn delta_trend_matches_sign(previous in 0.0f64..=100.0, current in 0.0f64..=100.0) {
        let delta = daily_delta(&series_from(&[previous, current]), current).unwrap();

        prop_assert!(delta.change_percent.is_finite());
        prop_assert_eq!(delta.trend == Trend::Up, delta.change > 0.0);
        prop_assert_eq!(delta.trend == Trend::Down, delta.change < 0.0);
        prop_assert_eq!(delta.trend == Trend::Stable, delta.change == 0.0);
    }
}
