//! Path resolution for the data directory

use std::path::{Path, PathBuf};

/// Resolves standard paths under the scoretrail data directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// Resolve the default data directory (`~/.scoretrail`)
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            root: home.join(".scoretrail"),
        })
    }

    /// Use an explicit data directory
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory holding one JSON document per subject
    pub fn history_dir(&self) -> PathBuf {
        self.root.join("history")
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }
}
