use scoretrail_core::{StreakKind, TrackerReport, Trend};

fn trend_word(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Stable => "stable",
    }
}

/// Human-readable report for `url`
pub fn render_report(report: &TrackerReport, url: &str) -> String {
    let Some(current) = report.current_score else {
        return format!("No history for {}", url);
    };

    let mut lines = vec![
        format!("Subject:  {}", report.subject_key),
        format!(
            "Score:    {} ({} observations)",
            current,
            report.series.len()
        ),
    ];

    match &report.delta {
        Some(delta) => {
            let mut line = format!(
                "Change:   {:+.1} ({:+.1}%) {}",
                delta.change,
                delta.change_percent,
                trend_word(delta.trend)
            );
            if !delta.affected_factors.is_empty() {
                let labels: Vec<&str> = delta.affected_factors.iter().map(|f| f.label()).collect();
                line.push_str(&format!(" | factors: {}", labels.join(", ")));
            }
            lines.push(line);
        }
        None => lines.push("Change:   n/a (needs 2 days)".to_string()),
    }

    let kind = match report.streak.kind {
        StreakKind::Improvement => "improving",
        StreakKind::None => "no streak",
    };
    lines.push(format!(
        "Streak:   current {}, best {} ({})",
        report.streak.current, report.streak.best, kind
    ));

    match &report.forecast {
        Some(f) => lines.push(format!("Forecast: 7d {}, 30d {}", f.horizon_7, f.horizon_30)),
        None => lines.push("Forecast: n/a (needs 3 days)".to_string()),
    }

    if !report.persisted {
        lines.push("Saved:    no (history write failed)".to_string());
    }

    lines.join("\n")
}
