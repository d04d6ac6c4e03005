use super::{open_tracker, render::render_report};
use std::path::Path;

pub fn run(data_dir: Option<&Path>, url: &str, json: bool) -> anyhow::Result<()> {
    let tracker = open_tracker(data_dir)?;
    let report = tracker.report(url);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report, url));
    }
    Ok(())
}
