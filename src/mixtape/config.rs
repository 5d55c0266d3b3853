use crate::collector::DEFAULT_BATCH_SIZE;
use crate::error::{MixtapeError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Run settings, read from a JSON file. Missing keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MixtapeConfig {
    /// Records handled per ingestion batch
    pub batch_size: usize,

    /// Indent the output document
    pub pretty: bool,

    /// Exit non-zero when any record was skipped or any operation was
    /// rejected or failed
    pub strict: bool,
}

impl Default for MixtapeConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            pretty: false,
            strict: false,
        }
    }
}

impl MixtapeConfig {
    /// The platform config directory, e.g. `~/.config/mixtape`.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "mixtape", "mixtape").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load `config.json` from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(config_path)
    }

    /// Load an explicitly named config file. The file must exist.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MixtapeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: MixtapeConfig = serde_json::from_str(&content)
            .map_err(|e| MixtapeError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(MixtapeError::Config(
                "batch_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
