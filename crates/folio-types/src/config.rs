//! Frontend configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Settings for the terminal frontend and its loading phase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Header printed above the terminal.
    #[serde(default = "default_title")]
    pub title: String,
    /// How long the loading animation runs before the banner appears.
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u32,
    /// Interval between loading animation frames.
    #[serde(default = "default_loading_tick_ms")]
    pub loading_tick_ms: u32,
}

fn default_title() -> String {
    "2Usi's Hacking Terminal".to_string()
}
fn default_loading_delay_ms() -> u32 {
    3000
}
fn default_loading_tick_ms() -> u32 {
    200
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            loading_delay_ms: default_loading_delay_ms(),
            loading_tick_ms: default_loading_tick_ms(),
        }
    }
}

impl FolioConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: FolioConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)
            .map_err(|e| FolioError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.loading_tick_ms == 0 {
            return Err(FolioError::Config(
                "loading_tick_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
