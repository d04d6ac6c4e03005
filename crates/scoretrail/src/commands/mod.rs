pub mod history;
pub mod key;
pub mod record;
pub mod render;
pub mod show;
pub mod version;

use scoretrail_core::{Tracker, TrackerConfig};
use scoretrail_store::{FileStore, Paths};
use std::path::Path;

fn resolve_paths(data_dir: Option<&Path>) -> anyhow::Result<Paths> {
    match data_dir {
        Some(dir) => Ok(Paths::with_root(dir)),
        None => Ok(Paths::new()?),
    }
}

/// File-backed tracker rooted at the data directory
pub fn open_tracker(data_dir: Option<&Path>) -> anyhow::Result<Tracker<FileStore>> {
    let paths = resolve_paths(data_dir)?;
    let config = TrackerConfig::load(&paths.config_file());
    Ok(Tracker::new(FileStore::new(paths.history_dir()), config))
}
