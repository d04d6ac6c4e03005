use super::open_tracker;
use scoretrail_core::{summarize, HistorySummary};
use scoretrail_store::{subject_key, Series};
use std::path::Path;

fn format_summary(summary: &HistorySummary) -> String {
    format!(
        "Observations: {}\n\
         Range: {} .. {}\n\
         Min: {:.1} | Max: {:.1} | Avg: {:.1}\n\
         Net change: {:+.1}",
        summary.count,
        summary.first_date,
        summary.last_date,
        summary.min,
        summary.max,
        summary.average,
        summary.net_change
    )
}

fn format_listing(series: &Series, limit: usize) -> String {
    let mut previous: Option<f64> = None;
    let mut rows: Vec<String> = series
        .iter()
        .map(|obs| {
            let change = previous
                .map(|p| format!("{:+.1}", obs.score - p))
                .unwrap_or_else(|| "-".to_string());
            previous = Some(obs.score);
            format!("  {} | score:{:.1} change:{}", obs.date, obs.score, change)
        })
        .collect();
    rows.reverse();
    rows.truncate(limit);

    format!(
        "Recent Observations (last {})\n=============================\n{}",
        rows.len(),
        rows.join("\n")
    )
}

pub fn run(data_dir: Option<&Path>, url: &str, stats: bool, limit: usize) -> anyhow::Result<()> {
    let tracker = open_tracker(data_dir)?;
    let series = tracker.history().load(&subject_key(url));

    if series.is_empty() {
        println!("No history for {}", url);
        return Ok(());
    }

    if stats {
        if let Some(summary) = summarize(&series) {
            println!("{}", format_summary(&summary));
        }
        return Ok(());
    }

    println!("{}", format_listing(&series, limit));
    Ok(())
}
