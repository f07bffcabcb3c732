//! Engine configuration for grimoire
//!
//! Stored as TOML. Discovery order: an explicit path, then
//! `$GRIMOIRE_CONFIG_DIR/config.toml`, then `<config dir>/grimoire/config.toml`.
//! A missing file yields the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{GrimoireError, Result};

pub use types::{DuplicateConfig, OrganizeConfig, TagConfig};

const CONFIG_DIR: &str = "grimoire";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRIMOIRE_CONFIG_DIR";

impl OrganizeConfig {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GrimoireError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: OrganizeConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location, or defaults if no file exists there
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Reject values the engine cannot honor
    pub fn validate(&self) -> Result<()> {
        let dup = &self.duplicates;
        if !(0.0..=1.0).contains(&dup.threshold) {
            bail_invalid!("duplicates.threshold", dup.threshold);
        }
        if !(0.0..=1.0).contains(&dup.min_length_ratio) {
            bail_invalid!("duplicates.min_length_ratio", dup.min_length_ratio);
        }
        if self.tags.max_suggestions == 0 {
            bail_invalid!("tags.max_suggestions", self.tags.max_suggestions);
        }
        Ok(())
    }
}
