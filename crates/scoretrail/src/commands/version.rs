use scoretrail_core::{TrackerConfig, MAX_RETENTION_DAYS};

fn version_text() -> String {
    let defaults = TrackerConfig::default();
    format!(
        "scoretrail {}\n\
         retention: up to {} daily observations per URL\n\
         forecast window: {} observations (default)",
        env!("CARGO_PKG_VERSION"),
        MAX_RETENTION_DAYS,
        defaults.forecast_window
    )
}

pub fn run() -> anyhow::Result<()> {
    println!("{}", version_text());
    Ok(())
}
