use super::{open_tracker, render::render_report};
use std::path::Path;

pub fn run(data_dir: Option<&Path>, url: &str, score: f64, json: bool) -> anyhow::Result<()> {
    let tracker = open_tracker(data_dir)?;
    let report = tracker.record(url, score)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report, url));
    }
    Ok(())
}
