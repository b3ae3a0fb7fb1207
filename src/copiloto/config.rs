use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CopilotoError, Result};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for copiloto, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CopilotoConfig {
    /// Include items with `isActive = false` in listings
    #[serde(default)]
    pub include_inactive: bool,

    /// Cap on the number of rows a listing shows (None = unlimited)
    #[serde(default)]
    pub list_limit: Option<usize>,
}

impl Default for CopilotoConfig {
    fn default() -> Self {
        Self {
            include_inactive: false,
            list_limit: None,
        }
    }
}

impl CopilotoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CopilotoError::Io)?;
        let config: CopilotoConfig =
            serde_json::from_str(&content).map_err(CopilotoError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CopilotoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CopilotoError::Serialization)?;
        fs::write(config_path, content).map_err(CopilotoError::Io)?;
        Ok(())
    }
}
