//! Configuration for gororobas (stored in ~/.config/gororobas/config.toml)
//!
//! ```toml
//! [plain_text]
//! block_separator = "\n"
//!
//! [preview]
//! max_nodes = 3
//! max_chars = 280
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GororobasError, Result};
use crate::richtext::{PlainTextOptions, PreviewOptions};

const CONFIG_DIR: &str = "gororobas";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GOROROBAS_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Options for the plain-text projector
    #[serde(default)]
    pub plain_text: PlainTextOptions,

    /// Default bounds for previews
    #[serde(default)]
    pub preview: PreviewOptions,
}

impl Config {
    /// Location of the config file, honouring `GOROROBAS_CONFIG_DIR`
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GororobasError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load the config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GororobasError::io_operation("read config", path.display(), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| GororobasError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate(path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.preview.max_chars == 0 {
            return Err(GororobasError::InvalidConfig {
                path: path.to_path_buf(),
                reason: "preview.max_chars must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
