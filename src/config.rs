//! User configuration for the command-line driver.
//!
//! Read from `$XDG_CONFIG_HOME/keycalc/config.toml` when present. Every field
//! has a default, so an empty or missing file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

use crate::calculator::display;

/// How the display string is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// ASCII symbols as stored in the buffer: `1.5*2`.
    #[default]
    Canonical,
    /// Keypad glyphs: `1,5×2`.
    Locale,
}

impl DisplayStyle {
    pub fn render(self, display: &str) -> String {
        match self {
            Self::Canonical => display.to_string(),
            Self::Locale => display::localize(display),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display_style: DisplayStyle,
    /// Print the display after every key instead of once per line.
    pub trace: bool,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Load from `path`, or from the default location if it exists.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
