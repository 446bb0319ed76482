use anyhow::Result;
use std::path::{Path, PathBuf};

/// Resolves where config and data files live.
///
/// Defaults to `<platform config dir>/rosebinge`; `ROSEBINGE_BASE_PATH`
/// overrides the base for containers and tests.
pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        if let Ok(base) = std::env::var("ROSEBINGE_BASE_PATH") {
            return Ok(Self::with_base(PathBuf::from(base)));
        }

        let base = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("rosebinge");
        Ok(Self::with_base(base))
    }

    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn watchlist_file(&self) -> PathBuf {
        self.data_dir.join("watchlist.json")
    }

    pub fn recent_searches_file(&self) -> PathBuf {
        self.data_dir.join("recent_searches.json")
    }
}
